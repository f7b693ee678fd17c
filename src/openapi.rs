//! OpenAPI document for the public endpoints.
//!
//! The document is assembled once from configuration and then served as-is, so
//! external tooling (GPT builders, client generators) can import the API with
//! the correct public base URL.

use serde_json::{json, Value};

use crate::config::{
    OpenApiConfig, ARCHIVE_KEY, ARCHIVE_LEN, DONE_KEY, NEXT_KEY, OPENAPI_DESCRIPTION,
    OPENAPI_TITLE, OPENAPI_VERSION,
};

/// Build the OpenAPI 3.1 document.
///
/// When `server_url` is configured it becomes the only entry in `servers`;
/// otherwise the key is omitted and clients resolve paths against the origin.
pub fn build_document(config: &OpenApiConfig) -> Value {
    let mut document = json!({
        "openapi": "3.1.0",
        "info": {
            "title": OPENAPI_TITLE,
            "version": OPENAPI_VERSION,
            "description": OPENAPI_DESCRIPTION,
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Root",
                    "operationId": "root__get",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/StatusMessage" }
                                }
                            }
                        }
                    }
                }
            },
            "/dave": {
                "post": {
                    "summary": "Dave",
                    "operationId": "dave_dave_post",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/UserInput" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/DaveResponse" }
                                }
                            }
                        },
                        "422": {
                            "description": "Validation Error",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HTTPValidationError" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "StatusMessage": {
                    "title": "StatusMessage",
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "title": "Message", "type": "string" }
                    }
                },
                "UserInput": {
                    "title": "UserInput",
                    "type": "object",
                    "required": ["text"],
                    "properties": {
                        "text": { "title": "Text", "type": "string" }
                    }
                },
                "Exchange": {
                    "title": "Exchange",
                    "type": "object",
                    "required": ["role", "text"],
                    "properties": {
                        "role": { "title": "Role", "type": "string", "enum": ["user", "assistant"] },
                        "text": { "title": "Text", "type": "string" }
                    }
                },
                "DaveResponse": {
                    "title": "DaveResponse",
                    "type": "object",
                    "required": [DONE_KEY, NEXT_KEY, ARCHIVE_KEY],
                    "properties": {
                        DONE_KEY: { "type": "string" },
                        NEXT_KEY: { "type": "string" },
                        ARCHIVE_KEY: {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Exchange" },
                            "minItems": ARCHIVE_LEN,
                            "maxItems": ARCHIVE_LEN
                        }
                    }
                },
                "HTTPValidationError": {
                    "title": "HTTPValidationError",
                    "type": "object",
                    "properties": {
                        "detail": {
                            "title": "Detail",
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["loc", "msg", "type"],
                                "properties": {
                                    "loc": { "type": "array", "items": { "type": "string" } },
                                    "msg": { "type": "string" },
                                    "type": { "type": "string" }
                                }
                            }
                        }
                    }
                }
            }
        }
    });

    if let Some(url) = &config.server_url {
        document["servers"] = json!([{ "url": url }]);
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_endpoints() {
        let doc = build_document(&OpenApiConfig::default());
        assert!(doc["paths"]["/"]["get"].is_object());
        assert!(doc["paths"]["/dave"]["post"].is_object());
        assert_eq!(doc["info"]["title"], OPENAPI_TITLE);
        assert!(doc.get("servers").is_none());
    }

    #[test]
    fn test_document_includes_configured_server() {
        let doc = build_document(&OpenApiConfig {
            server_url: Some("https://dave-pmea.onrender.com".to_string()),
        });
        assert_eq!(doc["servers"][0]["url"], "https://dave-pmea.onrender.com");
        assert_eq!(doc["servers"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_response_schema_uses_emoji_keys() {
        let doc = build_document(&OpenApiConfig::default());
        let props = &doc["components"]["schemas"]["DaveResponse"]["properties"];
        assert!(props[DONE_KEY].is_object());
        assert!(props[NEXT_KEY].is_object());
        assert!(props[ARCHIVE_KEY].is_object());
    }
}
