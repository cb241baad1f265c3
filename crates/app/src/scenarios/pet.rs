//! `/pet` scenarios.

use petstore_domain::{
    Assertion, Category, DomainResult, FormDataField, Pet, RequestBody, RequestSpec, Scenario, Tag,
};

use super::{PET_ID, UPLOAD_FIXTURE};

fn doggie(name: &str) -> Pet {
    Pet {
        id: PET_ID,
        name: name.to_string(),
        category: Category {
            id: 0,
            name: "Dog".to_string(),
        },
        photo_urls: vec!["url1".to_string()],
        tags: vec![Tag {
            id: 0,
            name: "tag1".to_string(),
        }],
        status: "available".to_string(),
    }
}

pub(super) fn scenarios() -> DomainResult<Vec<Scenario>> {
    Ok(vec![
        Scenario::new(
            RequestSpec::post("add new pet", "/pet/")
                .with_body(RequestBody::json_from(&doggie("Doggie"))?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.name", "Doggie"))
        .expect(Assertion::json_equals("$.status", "available")),
        Scenario::new(
            RequestSpec::post("upload image", "/pet/{petId}/uploadImage")
                .with_path_param("petId", PET_ID)
                .with_body(RequestBody::form_data(vec![FormDataField::file(
                    "file",
                    UPLOAD_FIXTURE,
                )])),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_has("$.message")),
        Scenario::new(
            RequestSpec::get("get pet by id", "/pet/{petId}")
                .with_path_param("petId", PET_ID),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.id", PET_ID)),
        Scenario::new(
            RequestSpec::get("find pets by status", "/pet/findByStatus")
                .with_query("status", "available"),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_not_empty("$")),
        Scenario::new(
            RequestSpec::put("update pet", "/pet")
                .with_body(RequestBody::json_from(&doggie("Doggie Updated"))?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.name", "Doggie Updated")),
        Scenario::new(
            RequestSpec::post("update pet with form data", "/pet/{petId}")
                .with_path_param("petId", PET_ID)
                .with_body(RequestBody::form([("name", "Puppy"), ("status", "available")])),
        )
        .expect(Assertion::status(200)),
        Scenario::new(
            RequestSpec::delete("delete pet", "/pet/{petId}")
                .with_path_param("petId", PET_ID),
        )
        .expect(Assertion::status(200)),
    ])
}
