#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Temperature {0} is outside the supported range 0.0..=2.0")]
    TemperatureOutOfRange(f32),
}
