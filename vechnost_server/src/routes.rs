//! Request handler definitions
//!
//! Each route and its handler live here. Handlers that grow beyond a few lines MUST go into a
//! separate module. Keep this module neat and tidy 🙏
//!
//! Handlers carry no state of their own: they deserialize the request, call one method on the
//! matching API object and shape the response. Anything that blocks the thread must stay out of
//! here, since each worker processes its requests sequentially and a blocked worker stops serving
//! every request it owns. Database calls are async and are fine.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use serde_json::json;
use vechnost_engine::{
    db_types::{NewCategory, NewDeposit, NewPaymentMethod, NewProduct, NewRating, NewUser},
    helpers::order_total,
    objects::{BulkAddRequest, CreateOrderRequest, DepositQueryFilter, OrderQueryFilter, ProductQueryFilter},
    CatalogApi,
    CatalogManagement,
    DepositApi,
    DepositManagement,
    OrderFlowApi,
    OrderManagement,
    RatingApi,
    RatingManagement,
    ReportApi,
    Reporting,
    UserApi,
    UserManagement,
};

use crate::{
    data_objects::{
        CalcRequest,
        CheckGameIdRequest,
        LoginRequest,
        LoginResponse,
        PaymentWebhook,
        ProviderConfigRequest,
        RankingQuery,
        RegisterRequest,
        UserSummary,
        WebhookQuery,
    },
    errors::ServerError,
    helpers::{auth_token, hash_password, is_valid_email},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<B>(core::marker::PhantomData<fn() -> B>);}
        paste::paste! { impl<B> [<$name:camel Route>]<B> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> B>)
            }
        }}
        paste::paste! { impl<B> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<B>
        where
            B: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<B>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

#[get("/")]
pub async fn index() -> impl Responder {
    trace!("💻️ Received root info request");
    HttpResponse::Ok().json(json!({"name": "Vechnost", "message": "Backend running"}))
}

route!(storage_check => Get "/test" impl Reporting);
/// A deploy-time smoke check. Reports whether the database answers and
/// which tables it holds; the error text is clipped so that connection
/// strings never leak into the response.
pub async fn storage_check<B: Reporting>(api: web::Data<ReportApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET storage check");
    let info = match api.storage_tables().await {
        Ok(tables) => json!({"backend": "ok", "database": "connected", "collections": tables}),
        Err(e) => {
            let msg: String = e.to_string().chars().take(80).collect();
            json!({"backend": "ok", "database": format!("error: {msg}"), "collections": []})
        },
    };
    Ok(HttpResponse::Ok().json(info))
}

//----------------------------------------------   Auth  ----------------------------------------------------
route!(register => Post "/api/auth/register" impl UserManagement);
/// Passwords are digested before they reach the engine; the plaintext never
/// leaves this function.
pub async fn register<B: UserManagement>(
    body: web::Json<RegisterRequest>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    debug!("💻️ POST register for {}", req.email);
    if !is_valid_email(&req.email) {
        return Err(ServerError::BadRequest("Invalid email address".to_string()));
    }
    let user = NewUser {
        name: req.name,
        email: req.email,
        password_hash: hash_password(&req.password),
        phone: req.phone,
    };
    let user = api.register(user).await?;
    Ok(HttpResponse::Ok().json(json!({"id": user.id, "message": "Registered"})))
}

route!(login => Post "/api/auth/login" impl UserManagement);
pub async fn login<B: UserManagement>(
    body: web::Json<LoginRequest>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    debug!("💻️ POST login for {}", req.email);
    let user = api.login(&req.email, &hash_password(&req.password)).await?;
    let response = LoginResponse {
        token: auth_token(user.id),
        user: UserSummary { id: user.id, name: user.name, level: user.level },
    };
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(create_category => Post "/api/admin/categories" impl CatalogManagement);
pub async fn create_category<B: CatalogManagement>(
    body: web::Json<NewCategory>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST new category");
    let category = api.create_category(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"id": category.id})))
}

route!(categories => Get "/api/categories" impl CatalogManagement);
pub async fn categories<B: CatalogManagement>(api: web::Data<CatalogApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET categories");
    let categories = api.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

route!(admin_categories => Get "/api/admin/categories" impl CatalogManagement);
/// The admin console reads the same listing under its own prefix.
pub async fn admin_categories<B: CatalogManagement>(
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    categories(api).await
}

route!(delete_category => Delete "/api/admin/categories/{category_id}" impl CatalogManagement);
pub async fn delete_category<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE category {id}");
    api.delete_category(id).await?;
    Ok(HttpResponse::Ok().json(json!({"deleted": true})))
}

route!(create_product => Post "/api/admin/products" impl CatalogManagement);
pub async fn create_product<B: CatalogManagement>(
    body: web::Json<NewProduct>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST new product");
    let product = api.create_product(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"id": product.id})))
}

route!(products => Get "/api/products" impl CatalogManagement);
pub async fn products<B: CatalogManagement>(
    query: web::Query<ProductQueryFilter>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let filter = query.into_inner();
    trace!("💻️ GET products. Filter: {filter:?}");
    let products = api.search_products(filter).await?;
    Ok(HttpResponse::Ok().json(products))
}

route!(delete_product => Delete "/api/admin/products/{product_id}" impl CatalogManagement);
pub async fn delete_product<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE product {id}");
    api.delete_product(id).await?;
    Ok(HttpResponse::Ok().json(json!({"deleted": true})))
}

route!(bulk_add_products => Post "/api/admin/products/bulk-add" impl CatalogManagement);
pub async fn bulk_add_products<B: CatalogManagement>(
    body: web::Json<BulkAddRequest>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    debug!("💻️ POST bulk add of {} products from {}", request.items.len(), request.provider);
    let inserted = api.bulk_add(request).await?;
    Ok(HttpResponse::Ok().json(json!({"inserted": inserted})))
}

//----------------------------------------------   Users  ----------------------------------------------------
route!(users => Get "/api/admin/users" impl UserManagement);
/// Password digests stay out of the listing; the record type skips them on
/// serialization.
pub async fn users<B: UserManagement>(api: web::Data<UserApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET users");
    let users = api.users().await?;
    Ok(HttpResponse::Ok().json(users))
}

route!(delete_user => Delete "/api/admin/users/{user_id}" impl UserManagement);
pub async fn delete_user<B: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE user {id}");
    api.delete_user(id).await?;
    Ok(HttpResponse::Ok().json(json!({"deleted": true})))
}

//----------------------------------------------   Payment methods  ----------------------------------------------
route!(create_payment_method => Post "/api/admin/payment-methods" impl CatalogManagement);
pub async fn create_payment_method<B: CatalogManagement>(
    body: web::Json<NewPaymentMethod>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST new payment method");
    let method = api.create_payment_method(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"id": method.id})))
}

route!(payment_methods => Get "/api/payment-methods" impl CatalogManagement);
pub async fn payment_methods<B: CatalogManagement>(
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET payment methods");
    let methods = api.active_payment_methods().await?;
    Ok(HttpResponse::Ok().json(methods))
}

route!(delete_payment_method => Delete "/api/admin/payment-methods/{method_id}" impl CatalogManagement);
pub async fn delete_payment_method<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE payment method {id}");
    api.delete_payment_method(id).await?;
    Ok(HttpResponse::Ok().json(json!({"deleted": true})))
}

route!(add_provider => Post "/api/admin/providers" impl CatalogManagement);
pub async fn add_provider<B: CatalogManagement>(
    body: web::Json<ProviderConfigRequest>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let config = body.into_inner();
    debug!("💻️ POST provider credentials for {}", config.name);
    let id = api.add_provider_config(config.into()).await?;
    Ok(HttpResponse::Ok().json(json!({"id": id})))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/api/orders" impl OrderManagement, CatalogManagement);
pub async fn create_order<B>(
    body: web::Json<CreateOrderRequest>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + CatalogManagement,
{
    let request = body.into_inner();
    debug!("💻️ POST new order for product {}", request.product_id);
    let result = api.create_order(request).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(orders => Get "/api/orders" impl OrderManagement);
pub async fn orders<B: OrderManagement>(
    query: web::Query<OrderQueryFilter>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let filter = query.into_inner();
    trace!("💻️ GET orders. Filter: {filter:?}");
    let orders = api.search_orders(filter).await?;
    Ok(HttpResponse::Ok().json(orders))
}

//----------------------------------------------   Payment webhooks  ----------------------------------------------
route!(tripay_webhook => Post "/api/payment/tripay/webhook" impl OrderManagement);
pub async fn tripay_webhook<B: OrderManagement>(
    body: web::Json<PaymentWebhook>,
    query: web::Query<WebhookQuery>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError> {
    payment_webhook(body.into_inner(), query.into_inner(), api.as_ref()).await
}

route!(tokopay_webhook => Post "/api/payment/tokopay/webhook" impl OrderManagement);
pub async fn tokopay_webhook<B: OrderManagement>(
    body: web::Json<PaymentWebhook>,
    query: web::Query<WebhookQuery>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError> {
    payment_webhook(body.into_inner(), query.into_inner(), api.as_ref()).await
}

/// Both gateways share one reconciliation path. The reference may arrive in
/// the body or the query string; an empty string counts as missing.
async fn payment_webhook<B: OrderManagement>(
    webhook: PaymentWebhook,
    query: WebhookQuery,
    api: &OrderFlowApi<B>,
) -> Result<HttpResponse, ServerError> {
    let reference = webhook
        .reference
        .filter(|r| !r.is_empty())
        .or(query.reference.filter(|r| !r.is_empty()))
        .ok_or_else(|| ServerError::BadRequest("Missing reference".to_string()))?;
    debug!("💻️ Payment webhook for reference {reference}");
    let order = api.reconcile_payment(&reference, webhook.status.into()).await?;
    trace!("💻️ Order {} is now {}", order.id, order.status);
    Ok(HttpResponse::Ok().json(json!({"ok": true})))
}

//----------------------------------------------   Ratings  ----------------------------------------------------
route!(create_rating => Post "/api/ratings" impl RatingManagement, CatalogManagement);
pub async fn create_rating<B>(
    body: web::Json<NewRating>,
    api: web::Data<RatingApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: RatingManagement + CatalogManagement,
{
    let rating = body.into_inner();
    debug!("💻️ POST rating for product {}", rating.product_id);
    let rating = api.create_rating(rating).await?;
    Ok(HttpResponse::Ok().json(json!({"id": rating.id})))
}

route!(ratings => Get "/api/ratings/{product_id}" impl RatingManagement);
pub async fn ratings<B: RatingManagement>(
    path: web::Path<i64>,
    api: web::Data<RatingApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let product_id = path.into_inner();
    trace!("💻️ GET ratings for product {product_id}");
    let ratings = api.ratings_for_product(product_id).await?;
    Ok(HttpResponse::Ok().json(ratings))
}

//----------------------------------------------   Deposits  ----------------------------------------------------
route!(create_deposit => Post "/api/deposits" impl DepositManagement);
pub async fn create_deposit<B: DepositManagement>(
    body: web::Json<NewDeposit>,
    api: web::Data<DepositApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let deposit = body.into_inner();
    debug!("💻️ POST deposit for user {}", deposit.user_id);
    let deposit = api.create_deposit(deposit).await?;
    Ok(HttpResponse::Ok().json(json!({"id": deposit.id})))
}

route!(deposits => Get "/api/deposits" impl DepositManagement);
pub async fn deposits<B: DepositManagement>(
    query: web::Query<DepositQueryFilter>,
    api: web::Data<DepositApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let filter = query.into_inner();
    trace!("💻️ GET deposits. Filter: {filter:?}");
    let deposits = api.search_deposits(filter).await?;
    Ok(HttpResponse::Ok().json(deposits))
}

//----------------------------------------------   Tools  ----------------------------------------------------
/// A stand-in for the provider lookup: anything at least three characters
/// long gets a nickname echoed back. Wire this to the real provider APIs
/// before taking payments for account-bound goods.
#[post("/api/tools/check-game-id")]
pub async fn check_game_id(body: web::Json<CheckGameIdRequest>) -> impl Responder {
    let req = body.into_inner();
    trace!("💻️ Game id check for {}", req.game);
    if req.user_id.trim().chars().count() < 3 {
        return HttpResponse::Ok().json(json!({"valid": false, "message": "ID terlalu pendek"}));
    }
    let skip = req.user_id.chars().count().saturating_sub(4);
    let tail: String = req.user_id.chars().skip(skip).collect();
    HttpResponse::Ok().json(json!({"valid": true, "nickname": format!("Player-{tail}"), "game": req.game}))
}

/// Prices a hypothetical order without touching the catalog, so storefront
/// widgets can preview fees as the shopper types.
#[post("/api/tools/calc")]
pub async fn calc_total(body: web::Json<CalcRequest>) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    trace!("💻️ Price calc for {} × {}", req.amount, req.price);
    let breakdown = order_total(req.price, req.amount, req.fee_percent, req.fee_flat)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
    Ok(HttpResponse::Ok().json(breakdown))
}

//----------------------------------------------   Reports  ----------------------------------------------------
route!(top_products => Get "/api/top" impl Reporting, CatalogManagement);
pub async fn top_products<B>(
    query: web::Query<RankingQuery>,
    api: web::Data<ReportApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: Reporting + CatalogManagement,
{
    let limit = query.limit;
    trace!("💻️ GET top products, limit {limit}");
    let ranking = api.top_ranking(limit).await?;
    Ok(HttpResponse::Ok().json(ranking))
}

route!(admin_overview => Get "/api/admin/overview" impl Reporting);
pub async fn admin_overview<B: Reporting>(api: web::Data<ReportApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET admin overview");
    let overview = api.overview().await?;
    Ok(HttpResponse::Ok().json(overview))
}
