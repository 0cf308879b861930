// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::SpecDocument;
use super::endpoint::{Endpoint, Response};
use super::method::HttpMethod;

const NO_TAGS: [&str; 0] = [];

/// `/users` GET (Users) + POST (untagged), `/health` GET (untagged).
pub(crate) fn users_and_health() -> SpecDocument {
    SpecDocument::new(vec![
        Endpoint::new("/users", HttpMethod::Post)
            .with_description(Some("Create a user".to_owned()))
            .with_tags(NO_TAGS)
            .with_response("201", Response::new("Created")),
        Endpoint::new("/users", HttpMethod::Get)
            .with_description(Some("List users".to_owned()))
            .with_tags(["Users"])
            .with_response("200", Response::new("OK")),
        Endpoint::new("/health", HttpMethod::Get)
            .with_tags(NO_TAGS)
            .with_response("200", Response::new("Healthy")),
    ])
}

/// Small petstore-like document used by the demo mode and UI tests.
pub(crate) fn petstore() -> SpecDocument {
    SpecDocument::new(vec![
        Endpoint::new("/pets", HttpMethod::Get)
            .with_summary(Some("List all pets".to_owned()))
            .with_description(Some("Returns every pet the store knows about.".to_owned()))
            .with_tags(["pets"])
            .with_response(
                "200",
                Response::new("A paged array of pets")
                    .with_header("x-next", "A link to the next page of responses"),
            )
            .with_response("default", Response::new("unexpected error")),
        Endpoint::new("/pets", HttpMethod::Post)
            .with_summary(Some("Create a pet".to_owned()))
            .with_tags(["pets"])
            .with_response("201", Response::new("Null response"))
            .with_response("default", Response::new("unexpected error")),
        Endpoint::new("/pets/{petId}", HttpMethod::Get)
            .with_summary(Some("Info for a specific pet".to_owned()))
            .with_tags(["pets", "store"])
            .with_response("404", Response::new("Pet not found"))
            .with_response("200", Response::new("Expected response to a valid request")),
        Endpoint::new("/pets/{petId}", HttpMethod::Put)
            .with_tags(["pets"])
            .with_response("200", Response::new("Updated")),
        Endpoint::new("/pets/{petId}", HttpMethod::Patch)
            .with_tags(["pets"])
            .with_response("200", Response::new("Patched")),
        Endpoint::new("/pets/{petId}", HttpMethod::Delete)
            .with_tags(["pets"])
            .with_response("204", Response::new("Deleted")),
        Endpoint::new("/store/inventory", HttpMethod::Get)
            .with_summary(Some("Returns pet inventories by status".to_owned()))
            .with_tags(["store"])
            .with_response(
                "200",
                Response::new("successful operation")
                    .with_header("X-Rate-Limit", "calls per hour allowed by the user")
                    .with_header("X-Expires-After", "date in UTC when token expires"),
            ),
        Endpoint::new("/health", HttpMethod::Get),
    ])
    .with_info(Some("Swagger Petstore".to_owned()), Some("1.0.0".to_owned()))
    .with_servers(vec!["http://petstore.swagger.io/v1".to_owned()])
}
