use super::*;

#[tokio::test]
async fn test_owner_views_own_order() {
    let service = create_test_service();
    let order = place_order(&service, &customer()).await;

    let fetched = service.get_order(&order.id, &customer()).await.unwrap();
    assert_eq!(fetched.id, order.id);
}

#[tokio::test]
async fn test_foreign_customer_gets_forbidden_not_not_found() {
    let service = create_test_service();
    let order = place_order(&service, &customer()).await;

    let err = service
        .get_order(&order.id, &other_customer())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Forbidden(_)));
}

#[tokio::test]
async fn test_guest_cannot_view_orders() {
    let service = create_test_service();
    let order = place_order(&service, &Actor::Guest).await;

    // Even the guest who placed it: no identity, no later access
    let err = service.get_order(&order.id, &Actor::Guest).await.unwrap_err();
    assert!(matches!(err, OrderError::Forbidden(_)));
}

#[tokio::test]
async fn test_admin_and_vendor_view_access() {
    let service = create_test_service();
    let order = place_order(&service, &customer()).await;

    assert!(service.get_order(&order.id, &admin()).await.is_ok());
    assert!(service.get_order(&order.id, &vendor_a()).await.is_ok());
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let service = create_test_service();
    let err = service
        .get_order("no-such-order", &admin())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)));
}

#[tokio::test]
async fn test_guest_listing_requires_identity() {
    let service = create_test_service();
    let err = service
        .list_orders(&Actor::Guest, OrderFilters::all())
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Unauthenticated);
}

#[tokio::test]
async fn test_customer_listing_ignores_foreign_filter() {
    let service = create_test_service();
    place_order(&service, &customer()).await;
    place_order(&service, &other_customer()).await;

    // Asking for someone else's orders still returns only your own
    let page = service
        .list_orders(
            &customer(),
            OrderFilters::all().for_customer(OTHER_CUSTOMER_ID),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].customer_id, Some(CUSTOMER_ID));
}

#[tokio::test]
async fn test_vendor_listing_scoped_to_own_variants() {
    let service = create_test_service();
    // variant 1 belongs to vendor A, variant 3 to vendor B
    service
        .create_order(simple_request(1, 1), &customer())
        .await
        .unwrap();
    service
        .create_order(simple_request(3, 1), &customer())
        .await
        .unwrap();

    let page = service
        .list_orders(&vendor_a(), OrderFilters::all())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].items[0].variant_id, 1);
}

#[tokio::test]
async fn test_admin_listing_with_status_filter() {
    let service = create_test_service();
    place_order(&service, &customer()).await;
    let cancelled = place_order(&service, &customer()).await;
    service.cancel_order(&cancelled.id, &admin()).await.unwrap();

    let page = service
        .list_orders(
            &admin(),
            OrderFilters::all().with_status(OrderStatus::Cancelled),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].id, cancelled.id);
}
