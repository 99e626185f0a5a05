use crate::{CountryRecord, FailureKind, FetchError, LookupOutcome, StatusBody};

const NOT_FOUND_STATUS: u16 = 404;

/// Decodes a lookup response body.
///
/// The API answers with a JSON array of countries on success and with a
/// status object on failure. Only a status of 404 counts as "no matches";
/// any other object is an unexpected payload.
pub fn decode_lookup(body: &[u8]) -> Result<LookupOutcome, FetchError> {
    match first_significant_byte(body) {
        Some(b'[') => serde_json::from_slice::<Vec<CountryRecord>>(body)
            .map(LookupOutcome::Found)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string())),
        Some(b'{') => {
            let status: StatusBody = serde_json::from_slice(body).map_err(|err| {
                FetchError::new(FailureKind::UnexpectedPayload { status: None }, err.to_string())
            })?;
            if status.status == NOT_FOUND_STATUS {
                Ok(LookupOutcome::NotFound {
                    message: status.message,
                })
            } else {
                Err(FetchError::new(
                    FailureKind::UnexpectedPayload {
                        status: Some(status.status),
                    },
                    status.message.unwrap_or_default(),
                ))
            }
        }
        Some(_) => match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(_) => Err(FetchError::new(
                FailureKind::UnexpectedPayload { status: None },
                "response is neither an array nor an object",
            )),
            Err(err) => Err(FetchError::new(FailureKind::Decode, err.to_string())),
        },
        None => Err(FetchError::new(FailureKind::Decode, "empty response body")),
    }
}

fn first_significant_byte(body: &[u8]) -> Option<u8> {
    body.iter().copied().find(|byte| !byte.is_ascii_whitespace())
}
