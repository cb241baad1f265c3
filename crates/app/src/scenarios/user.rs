//! `/user` scenarios.

use petstore_domain::{Assertion, DomainResult, RequestBody, RequestSpec, Scenario, User};

fn john(phone: &str) -> User {
    User::new(
        997,
        "john_doe",
        "John",
        "Doe",
        "john@example.com",
        "123456789",
        phone,
        0,
    )
}

pub(super) fn scenarios() -> DomainResult<Vec<Scenario>> {
    let list = [
        john("admin"),
        User::new(
            998,
            "jane_doe",
            "Jane",
            "Doe",
            "jane@example.com",
            "987654321",
            "user",
            1,
        ),
    ];
    let array = [
        User::new(
            995,
            "ben_doe",
            "Ben",
            "Doe",
            "ben@example.com",
            "123456789",
            "0678965432",
            0,
        ),
        User::new(
            996,
            "den_doe",
            "Den",
            "Doe",
            "den@example.com",
            "987654321",
            "0465789345",
            1,
        ),
    ];
    let lilly = User::new(
        994,
        "lilly_doe",
        "Lilly",
        "Doe",
        "lilly@example.com",
        "1231242134214",
        "0765432879",
        0,
    );

    Ok(vec![
        Scenario::new(
            RequestSpec::post("create users with list", "/user/createWithList")
                .with_body(RequestBody::json_from(&list)?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.message", "ok")),
        Scenario::new(
            RequestSpec::get("get user by username", "/user/{username}")
                .with_path_param("username", "john_doe"),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.username", "john_doe")),
        Scenario::new(
            RequestSpec::put("update user", "/user/{username}")
                .with_path_param("username", "john_doe")
                .with_body(RequestBody::json_from(&john("047689452"))?),
        )
        .expect(Assertion::status(200))
        // The service echoes the user id as a string.
        .expect(Assertion::json_equals("$.message", "997")),
        Scenario::new(
            RequestSpec::delete("delete user", "/user/{username}")
                .with_path_param("username", "jane_doe"),
        )
        .expect(Assertion::status(200)),
        Scenario::new(
            RequestSpec::post("create users with array", "/user/createWithArray")
                .with_body(RequestBody::json_from(&array)?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.message", "ok")),
        Scenario::new(
            RequestSpec::post("create user", "/user").with_body(RequestBody::json_from(&lilly)?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.message", "994")),
        Scenario::new(
            RequestSpec::get("user login", "/user/login")
                .with_query("username", "john_doe")
                .with_query("password", "123456789"),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_has("$.message")),
        Scenario::new(RequestSpec::get("user logout", "/user/logout"))
            .expect(Assertion::status(200))
            .expect(Assertion::json_equals("$.message", "ok")),
    ])
}
