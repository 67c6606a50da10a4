//! Served OpenAPI document
//!
//! The document is assembled by hand and served as-is; there is no schema
//! generation pipeline behind it. It must be kept in step with the routes in
//! [`create_router`](crate::api::create_router).

use serde_json::{json, Value};

/// OpenAPI 3 description of the HTTP surface
///
/// The `Bearer` security scheme is documentation metadata only: no
/// middleware reads the `Authorization` header and every request is served
/// unauthenticated.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "PetStore API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Public APIs of the pet store application.",
            "contact": {
                "name": "PetStore Company",
                "url": "https://www.petstorecompany.com"
            }
        },
        "components": {
            "securitySchemes": {
                "Bearer": {
                    "type": "http",
                    "scheme": "bearer",
                    "description": "JWT Authorization header using the Bearer scheme. Declared for documentation purposes; requests are never authenticated."
                }
            },
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" }
                    }
                }
            }
        },
        "security": [ { "Bearer": [] } ],
        "paths": {
            "/petstore": {
                "get": {
                    "summary": "List all pets",
                    "responses": {
                        "200": {
                            "description": "Every pet in insertion order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Pet" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a pet",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Pet" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Pet appended to the store" }
                    }
                }
            },
            "/petstore/{id}": {
                "parameters": [
                    {
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "integer", "format": "int64" }
                    }
                ],
                "get": {
                    "summary": "Fetch a pet by id",
                    "responses": {
                        "200": {
                            "description": "The matching pet, or null when no pet carries the id",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Pet",
                                        "nullable": true
                                    }
                                }
                            }
                        }
                    }
                },
                "put": {
                    "summary": "Rename a pet",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "type": "string" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "The updated pet, or null when no pet carries the id",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Pet",
                                        "nullable": true
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Service health",
                    "security": [],
                    "responses": {
                        "200": { "description": "Status, version and pet count" }
                    }
                }
            }
        }
    })
}
