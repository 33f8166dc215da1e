//! Adds `num1` and `num2` from the invocation event.
//!
//! Either key may be missing, in which case it counts as `0`. Present
//! values are used as they are; see [`Operand::checked_add`] for which
//! combinations can be added.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sum_lambda_runtime::Context;

mod error;
pub use error::SumError;

mod operand;
pub use operand::Operand;

mod render;

pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok<S: Into<String>>(body: S) -> Self {
        Self {
            status_code: STATUS_OK,
            body: body.into(),
        }
    }
}

pub fn lambda_handler(event: Value, _context: &Context) -> Result<Response, SumError> {
    let mut event = match event {
        Value::Object(map) => map,
        other => {
            return Err(SumError::InvalidEvent {
                kind: operand::value_kind(&other),
            })
        }
    };

    let num1 = take_operand(&mut event, "num1")?;
    let num2 = take_operand(&mut event, "num2")?;

    let result = num1.checked_add(&num2)?;
    log::debug!("Added {num1:?} and {num2:?}: {result:?}");

    Ok(Response::ok(format!("Sum of {num1} and {num2} is {result}")))
}

fn take_operand(event: &mut Map<String, Value>, key: &str) -> Result<Operand, SumError> {
    match event.remove(key) {
        Some(value) => Operand::from_value(value),
        None => Ok(Operand::default()),
    }
}
