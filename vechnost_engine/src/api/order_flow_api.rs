use std::fmt::Debug;

use log::*;
use vechnost_common::{FeeRate, Money};

use crate::{
    api::objects::{CreateOrderRequest, NewOrderResult, OrderQueryFilter},
    db_types::{NewOrder, Order, OrderStatus, Provider},
    helpers::order_total,
    traits::{CatalogManagement, OrderFlowError, OrderManagement},
};

/// `OrderFlowApi` handles the life cycle of orders. It prices and records incoming orders and
/// applies the status updates that payment gateways push back at us.
pub struct OrderFlowApi<B> {
    db: B,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderFlowApi<B>
where B: OrderManagement + CatalogManagement
{
    /// Prices and stores a new order.
    ///
    /// The unit price always comes from the product record. If the request names a payment
    /// method, its fees are added on top of the base price; an unknown or inactive method code
    /// silently prices the order fee-free. The stored provider falls back from the request to the
    /// product's provider and finally to [`Provider::Manual`].
    ///
    /// Orders paid through a hosted gateway come back with a checkout URL in the result.
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<NewOrderResult, OrderFlowError> {
        if request.amount < 1 {
            return Err(OrderFlowError::InvalidAmount(request.amount));
        }
        let product = self
            .db
            .fetch_product(request.product_id)
            .await?
            .ok_or(OrderFlowError::ProductNotFound(request.product_id))?;
        let method = match request.payment_method_code.as_deref() {
            Some(code) => self.db.fetch_active_payment_method_by_code(code).await?,
            None => None,
        };
        let (fee_percent, fee_flat) =
            method.as_ref().map(|m| (m.fee_percent, m.fee_flat)).unwrap_or((FeeRate::ZERO, Money::ZERO));
        let pricing = order_total(product.price, request.amount, fee_percent, fee_flat)?;
        let provider = request.provider.or(product.provider).unwrap_or(Provider::Manual);
        let new_order = NewOrder {
            user_id: request.user_id,
            product_id: product.id,
            amount: request.amount,
            target_id: request.target_id,
            provider,
            payment_method_code: request.payment_method_code,
            payment_reference: request.payment_reference,
            total_price: pricing.total,
            note: request.note,
            gateway: method.map(|m| m.gateway),
        };
        let order = self.db.insert_order(new_order).await?;
        info!(
            "🔄️ Order {} created. {} × product {} comes to {}",
            order.id, order.amount, order.product_id, order.total_price
        );
        Ok(NewOrderResult { id: order.id, payment_url: order.payment_url, total_price: order.total_price })
    }
}

impl<B> OrderFlowApi<B>
where B: OrderManagement
{
    /// Applies a payment notification to the order it refers to.
    ///
    /// The reference is matched against `payment_reference` first. When no order carries it, a
    /// numeric reference is retried as an order id, since some gateways echo our own id back as
    /// the reference. The status update is unconditional, so replayed notifications are no-ops.
    pub async fn reconcile_payment(&self, reference: &str, status: OrderStatus) -> Result<Order, OrderFlowError> {
        let order = match self.db.fetch_order_by_payment_reference(reference).await? {
            Some(order) => Some(order),
            None => match reference.parse::<i64>() {
                Ok(id) => self.db.fetch_order(id).await?,
                Err(_) => None,
            },
        };
        let order = order.ok_or_else(|| OrderFlowError::OrderNotFound(reference.to_string()))?;
        let updated = self.db.update_order_status(order.id, status).await?;
        info!("🛍️ Payment update for order {}: {} -> {}", updated.id, order.status, updated.status);
        Ok(updated)
    }

    pub async fn search_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderFlowError> {
        self.db.search_orders(query).await
    }
}
