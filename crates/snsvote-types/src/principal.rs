use candid::Principal;
use serde::{Deserialize, Serialize};

///
/// RawPrincipal
/// Principal as handed over by a governance query: textual form, raw bytes,
/// or the `{ "__principal__": text }` object emitted by JSON encoders.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawPrincipal {
    Text(String),
    Bytes(Vec<u8>),
    Tagged {
        #[serde(rename = "__principal__")]
        text: String,
    },
}

impl From<Principal> for RawPrincipal {
    fn from(p: Principal) -> Self {
        Self::Text(p.to_text())
    }
}

impl From<&str> for RawPrincipal {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Normalize any accepted principal shape into a `Principal`.
/// Returns `None` for anything that does not decode.
#[must_use]
pub fn normalize_principal(raw: &RawPrincipal) -> Option<Principal> {
    match raw {
        RawPrincipal::Text(text) | RawPrincipal::Tagged { text } => {
            Principal::from_text(text.trim()).ok()
        }
        RawPrincipal::Bytes(bytes) => Principal::try_from_slice(bytes).ok(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const ANON: &str = "2vxsx-fae";

    #[test]
    fn every_shape_normalizes_to_the_same_principal() {
        let expected = Principal::anonymous();
        let shapes: Vec<RawPrincipal> = serde_json::from_str(&format!(
            r#"["{ANON}", {{"__principal__": "{ANON}"}}, [4]]"#
        ))
        .unwrap();

        for shape in &shapes {
            assert_eq!(normalize_principal(shape), Some(expected));
        }
    }

    #[test]
    fn invalid_principals_are_dropped() {
        assert_eq!(normalize_principal(&RawPrincipal::from("not-a-principal")), None);
        assert_eq!(normalize_principal(&RawPrincipal::Bytes(vec![0; 30])), None);
    }
}
