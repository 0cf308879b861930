// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use apiscope::detail::DetailFormatter;
use apiscope::index::EndpointIndex;
use apiscope::model::{SpecDocument, Tag};
use apiscope::nav::{Outline, Selection};
use apiscope::store::{LoadError, SpecFile};
use rstest::rstest;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn load_fixture(name: &str) -> (SpecDocument, EndpointIndex) {
    let file = SpecFile::new(fixture_path(name));
    EndpointIndex::load(&file).unwrap_or_else(|err| panic!("failed to load {name}: {err}"))
}

fn bucket_titles(index: &EndpointIndex, tag: &Tag) -> Vec<String> {
    index.bucket(tag).iter().map(|endpoint| endpoint.title()).collect()
}

#[test]
fn users_fixture_groups_by_tag_and_sorts_by_path_then_method() {
    let (document, index) = load_fixture("users_health.json");

    assert_eq!(
        index.tags().cloned().collect::<Vec<_>>(),
        vec![Tag::Untagged, Tag::named("Users")]
    );
    assert_eq!(bucket_titles(&index, &Tag::Untagged), vec!["GET@/health", "POST@/users"]);
    assert_eq!(bucket_titles(&index, &Tag::named("Users")), vec!["GET@/users"]);
    assert_eq!(index.endpoint_count(), 3);
    assert_eq!(document.endpoints().len(), 3, "OPTIONS is not a viewed method");
}

#[test]
fn users_fixture_keeps_every_server_and_flags_it() {
    let (document, _) = load_fixture("users_health.json");

    assert_eq!(document.title(), Some("Users API"));
    assert_eq!(document.version(), Some("2.1.0"));
    assert_eq!(document.primary_server(), Some("https://api.example.com/v2"));
    assert!(document.is_multi_server());
}

#[test]
fn users_fixture_detail_resolves_header_refs() {
    let (_, index) = load_fixture("users_health.json");
    let endpoint = &index.bucket(&Tag::named("Users"))[0];

    let expected = "\
GET@/users

Description : Lists every user.
Tags        : Users
Responses   :
    200:
        Description : OK
        Headers     :
            X-Rate-Limit: Requests left in the window
            X-Total-Count: Total number of users
    404:
        Description : No users";
    assert_eq!(DetailFormatter::new().render(endpoint).to_plain_string(), expected);
}

#[test]
fn users_fixture_detail_resolves_response_refs_for_untagged_endpoint() {
    let (_, index) = load_fixture("users_health.json");
    let endpoint = &index.bucket(&Tag::Untagged)[1];

    let expected = "\
POST@/users

Description : Creates a user account.
Tags        :
Responses   :
    201:
        Description : Created
    400:
        Description : Bad request
        Headers     :
            X-Request-Id: Correlation id";
    assert_eq!(DetailFormatter::new().render(endpoint).to_plain_string(), expected);
}

#[test]
fn petstore_fixture_shares_multi_tag_endpoints() {
    let (_, index) = load_fixture("petstore.json");

    assert_eq!(
        index.tags().cloned().collect::<Vec<_>>(),
        vec![Tag::Untagged, Tag::named("pets"), Tag::named("store")]
    );
    assert!(index.bucket(&Tag::Untagged).is_empty());
    assert_eq!(
        bucket_titles(&index, &Tag::named("pets")),
        vec!["GET@/pets", "POST@/pets", "GET@/pets/{petId}", "DELETE@/pets/{petId}"]
    );
    assert_eq!(bucket_titles(&index, &Tag::named("store")), vec!["GET@/pets/{petId}"]);
    let pets_entry = &index.bucket(&Tag::named("pets"))[2];
    let store_entry = &index.bucket(&Tag::named("store"))[0];
    assert!(std::sync::Arc::ptr_eq(pets_entry, store_entry));
    assert_eq!(pets_entry.tags().len(), 2, "repeated tag names collapse");
}

#[test]
fn petstore_fixture_follows_chained_response_refs() {
    let (_, index) = load_fixture("petstore.json");
    let list_pets = &index.bucket(&Tag::named("pets"))[0];
    assert_eq!(
        list_pets.responses().get("default").map(|response| response.description()),
        Some("unexpected error")
    );
}

#[test]
fn outline_walk_over_loaded_document_reaches_every_endpoint() {
    let (document, index) = load_fixture("petstore.json");
    let formatter = DetailFormatter::new();
    let mut outline = Outline::new(&index);
    outline.set_viewport_height(10);

    let mut seen = Vec::new();
    loop {
        match outline.select_current() {
            Selection::Endpoint(endpoint) => {
                assert!(!formatter.render(&endpoint).is_empty());
                seen.push(endpoint.title());
            }
            Selection::Toggled { .. } | Selection::Empty => {}
        }
        let before = outline.cursor();
        outline.move_by(1);
        if outline.cursor() == before {
            break;
        }
    }

    let mut expected =
        document.endpoints().iter().map(|endpoint| endpoint.title()).collect::<Vec<_>>();
    expected.push("GET@/pets/{petId}".to_owned());
    expected.sort();
    seen.sort();
    assert_eq!(seen, expected);
}

#[rstest]
#[case("broken_ref.json")]
#[case("truncated.json")]
#[case("does_not_exist.json")]
fn unusable_documents_fail_to_load(#[case] name: &str) {
    let path = fixture_path(name);
    let err = EndpointIndex::load(&SpecFile::new(&path)).unwrap_err();

    match (name, &err) {
        ("broken_ref.json", LoadError::UnresolvedRef { reference, path: reported }) => {
            assert_eq!(reference, "#/components/responses/Missing");
            assert_eq!(reported, &path);
        }
        ("truncated.json", LoadError::Json { .. }) => {}
        ("does_not_exist.json", LoadError::Io { .. }) => {}
        _ => panic!("unexpected error for {name}: {err:?}"),
    }
    assert!(err.to_string().contains(name), "error names the file: {err}");
}
