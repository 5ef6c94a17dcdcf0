#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use soil_suitability::domain::ports::ConfigProvider;
#[cfg(feature = "lambda")]
use soil_suitability::utils::logger;
#[cfg(feature = "lambda")]
use soil_suitability::{HttpTransport, Settings, SoilError, SoilService};

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Info,
    Suitability,
}

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub operation: Operation,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub status_code: u16,
    pub body: serde_json::Value,
}

#[cfg(feature = "lambda")]
impl Response {
    fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(e) => Self::from_error(&SoilError::processing(e)),
        }
    }

    fn from_error(e: &SoilError) -> Self {
        Self {
            status_code: e.http_status(),
            body: serde_json::json!({ "detail": e.user_friendly_message() }),
        }
    }
}

#[cfg(feature = "lambda")]
async fn function_handler(
    event: LambdaEvent<Request>,
    settings: &Settings,
) -> Result<Response, Error> {
    let request = event.payload;
    let service = SoilService::new(HttpTransport::new(settings));

    let response = match request.operation {
        Operation::Info => match service.soil_info(request.lat, request.lon).await {
            Ok(props) => Response::ok(&props),
            Err(e) => Response::from_error(&e),
        },
        Operation::Suitability => match service.soil_suitability(request.lat, request.lon).await {
            Ok(verdict) => Response::ok(&verdict),
            Err(e) => Response::from_error(&e),
        },
    };

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    use soil_suitability::utils::validation::Validate;

    let settings = Settings::from_env()?;
    settings.validate()?;
    logger::init_lambda_logger(settings.log_level());

    tracing::info!("Starting soil suitability Lambda against {}", settings.api_endpoint());

    let settings = &settings;
    run(service_fn(move |event| function_handler(event, settings))).await
}
