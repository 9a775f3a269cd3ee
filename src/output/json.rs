use serde_json::{json, Value};

use crate::error::VersionerError;
use crate::version::Resolution;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &VersionerError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn resolution_json(r: &Resolution) -> Value {
    json!({
        "version": r.version,
        "source": r.source,
        "raw": r.raw
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::version::{fallback_version, Source};

    #[test]
    fn test_resolution_envelope() {
        let r = Resolution {
            version: fallback_version("abc1234"),
            source: Source::Fallback,
            raw: "abc1234".into(),
        };
        let v = success(resolution_json(&r));
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["version"], "v0.0.0-abc1234");
        assert_eq!(v["data"]["source"], "fallback");
        assert_eq!(v["data"]["raw"], "abc1234");
    }

    #[test]
    fn test_error_envelope() {
        let e = VersionerError::new(ErrorCode::ToolInvocation, "boom");
        let v = error(&e);
        assert_eq!(v["success"], false);
        assert_eq!(v["error"]["code"], "TOOL_INVOCATION");
        assert_eq!(v["error"]["message"], "boom");
    }
}
