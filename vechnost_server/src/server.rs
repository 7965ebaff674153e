use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use vechnost_engine::{CatalogApi, DepositApi, OrderFlowApi, RatingApi, ReportApi, SqliteDatabase, UserApi};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        calc_total,
        check_game_id,
        health,
        index,
        AddProviderRoute,
        AdminCategoriesRoute,
        AdminOverviewRoute,
        BulkAddProductsRoute,
        CategoriesRoute,
        CreateCategoryRoute,
        CreateDepositRoute,
        CreateOrderRoute,
        CreatePaymentMethodRoute,
        CreateProductRoute,
        CreateRatingRoute,
        DeleteCategoryRoute,
        DeletePaymentMethodRoute,
        DeleteProductRoute,
        DeleteUserRoute,
        DepositsRoute,
        LoginRoute,
        OrdersRoute,
        PaymentMethodsRoute,
        ProductsRoute,
        RatingsRoute,
        RegisterRoute,
        StorageCheckRoute,
        TokopayWebhookRoute,
        TopProductsRoute,
        TripayWebhookRoute,
        UsersRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, config.max_db_connections)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let users_api = UserApi::new(db.clone());
        let catalog_api = CatalogApi::new(db.clone());
        let order_flow_api = OrderFlowApi::new(db.clone());
        let deposit_api = DepositApi::new(db.clone());
        let rating_api = RatingApi::new(db.clone());
        let report_api = ReportApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("vcn::access_log"))
            .app_data(web::Data::new(users_api))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(order_flow_api))
            .app_data(web::Data::new(deposit_api))
            .app_data(web::Data::new(rating_api))
            .app_data(web::Data::new(report_api))
            .service(health)
            .service(index)
            .service(check_game_id)
            .service(calc_total)
            .service(StorageCheckRoute::<SqliteDatabase>::new())
            .service(RegisterRoute::<SqliteDatabase>::new())
            .service(LoginRoute::<SqliteDatabase>::new())
            .service(CreateCategoryRoute::<SqliteDatabase>::new())
            .service(CategoriesRoute::<SqliteDatabase>::new())
            .service(AdminCategoriesRoute::<SqliteDatabase>::new())
            .service(DeleteCategoryRoute::<SqliteDatabase>::new())
            .service(CreateProductRoute::<SqliteDatabase>::new())
            .service(ProductsRoute::<SqliteDatabase>::new())
            .service(BulkAddProductsRoute::<SqliteDatabase>::new())
            .service(DeleteProductRoute::<SqliteDatabase>::new())
            .service(UsersRoute::<SqliteDatabase>::new())
            .service(DeleteUserRoute::<SqliteDatabase>::new())
            .service(CreatePaymentMethodRoute::<SqliteDatabase>::new())
            .service(PaymentMethodsRoute::<SqliteDatabase>::new())
            .service(DeletePaymentMethodRoute::<SqliteDatabase>::new())
            .service(AddProviderRoute::<SqliteDatabase>::new())
            .service(CreateOrderRoute::<SqliteDatabase>::new())
            .service(OrdersRoute::<SqliteDatabase>::new())
            .service(TripayWebhookRoute::<SqliteDatabase>::new())
            .service(TokopayWebhookRoute::<SqliteDatabase>::new())
            .service(CreateRatingRoute::<SqliteDatabase>::new())
            .service(RatingsRoute::<SqliteDatabase>::new())
            .service(CreateDepositRoute::<SqliteDatabase>::new())
            .service(DepositsRoute::<SqliteDatabase>::new())
            .service(TopProductsRoute::<SqliteDatabase>::new())
            .service(AdminOverviewRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
