//! Image export and comment responses.

use std::collections::BTreeMap;

use serde_json::Value;

use super::value::Obj;
use super::SchemaError;

/// Validate a `GET /images/:key` response body into node id -> URL.
///
/// Nodes the API failed to render map to `None`. A non-null `err` field is
/// reported as an error at path `err`.
pub fn parse_images(value: &Value) -> Result<BTreeMap<String, Option<String>>, SchemaError> {
    let root = Obj::new(value, "")?;

    if let Some(err) = root.opt_str("err")? {
        return Err(SchemaError::new("err", err));
    }

    let images = root.req_obj("images")?;
    images
        .keys()
        .map(|id| Ok((id.to_string(), images.opt_str(id)?)))
        .collect()
}

/// Validate a `GET /files/:key/comments` response body.
///
/// Comments are passed through as raw JSON objects.
pub fn parse_comments(value: &Value) -> Result<Vec<Value>, SchemaError> {
    let root = Obj::new(value, "")?;
    let items = root.req_array("comments")?;
    root.objects_in("comments", items)?;
    Ok(items.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_images() {
        let value = json!({
            "err": null,
            "images": { "1:2": "https://cdn/1-2.png", "1:3": null }
        });

        let images = parse_images(&value).unwrap();
        assert_eq!(images["1:2"].as_deref(), Some("https://cdn/1-2.png"));
        assert_eq!(images["1:3"], None);
    }

    #[test]
    fn test_images_api_error() {
        let value = json!({ "err": "Invalid node ids", "images": {} });
        let err = parse_images(&value).unwrap_err();
        assert_eq!(err.path, "err");
        assert_eq!(err.message, "Invalid node ids");
    }

    #[test]
    fn test_image_url_must_be_string() {
        let value = json!({ "images": { "1:2": 7 } });
        let err = parse_images(&value).unwrap_err();
        assert_eq!(err.path, "images.1:2");
    }

    #[test]
    fn test_parse_comments() {
        let value = json!({ "comments": [{ "id": "c1", "message": "Looks good" }] });
        let comments = parse_comments(&value).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0]["message"], "Looks good");
    }

    #[test]
    fn test_comments_must_be_objects() {
        let err = parse_comments(&json!({ "comments": ["hi"] })).unwrap_err();
        assert_eq!(err.path, "comments[0]");
    }
}
