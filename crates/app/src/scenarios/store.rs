//! `/store` scenarios.

use petstore_domain::{Assertion, DomainResult, Order, RequestBody, RequestSpec, Scenario};

use super::ORDER_ID;

pub(super) fn scenarios() -> DomainResult<Vec<Scenario>> {
    let order = Order {
        id: ORDER_ID,
        pet_id: 1,
        quantity: 1,
        ship_date: "2024-01-01T00:00:00.000Z".to_string(),
        status: "placed".to_string(),
        complete: true,
    };

    Ok(vec![
        Scenario::new(RequestSpec::get("get store inventory", "/store/inventory"))
            .expect(Assertion::status(200))
            .expect(Assertion::json_has("$.available")),
        Scenario::new(
            RequestSpec::post("place order", "/store/order")
                .with_body(RequestBody::json_from(&order)?),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.status", "placed")),
        Scenario::new(
            RequestSpec::get("get order by id", "/store/order/{orderId}")
                .with_path_param("orderId", ORDER_ID),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::json_equals("$.id", ORDER_ID)),
        Scenario::new(
            RequestSpec::delete("delete order", "/store/order/{orderId}")
                .with_path_param("orderId", ORDER_ID),
        )
        .expect(Assertion::status(200)),
    ])
}
