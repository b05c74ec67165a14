use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, Order, OrderSummary, OrderedProduct};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, orders, orders_products};

use super::models::{CustomerRow, NewOrderProductRow, NewOrderRow, OrderProductRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(
        &self,
        customer: Customer,
        products: Vec<OrderedProduct>,
    ) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let order = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id: customer.id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            // 2. Insert its lines, keeping the request order
            let new_lines: Vec<NewOrderProductRow> = products
                .into_iter()
                .zip(0..)
                .map(|(l, position)| NewOrderProductRow {
                    id: Uuid::new_v4(),
                    order_id: order.id,
                    product_id: l.product_id,
                    position,
                    price: l.price,
                    quantity: l.quantity,
                })
                .collect();
            let mut lines: Vec<OrderProductRow> = if new_lines.is_empty() {
                Vec::new()
            } else {
                diesel::insert_into(orders_products::table)
                    .values(&new_lines)
                    .returning(OrderProductRow::as_returning())
                    .get_results(conn)?
            };
            lines.sort_by_key(|l| l.position);

            Ok(Order {
                id: order.id,
                customer,
                products: lines.into_iter().map(OrderedProduct::from).collect(),
                created_at: order.created_at,
                updated_at: order.updated_at,
            })
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let found = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq(id))
            .select((OrderRow::as_select(), CustomerRow::as_select()))
            .first::<(OrderRow, CustomerRow)>(&mut conn)
            .optional()?;

        let Some((order, customer)) = found else {
            return Ok(None);
        };

        let lines = OrderProductRow::belonging_to(&order)
            .select(OrderProductRow::as_select())
            .order(orders_products::position.asc())
            .load(&mut conn)?;

        Ok(Some(Order {
            id: order.id,
            customer: customer.into(),
            products: lines.into_iter().map(OrderedProduct::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }))
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        let mut conn = self.pool.get()?;

        let offset = (page - 1).saturating_mul(limit);
        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = orders::table.count().get_result(conn)?;

            let rows = orders::table
                .select(OrderRow::as_select())
                .order(orders::created_at.desc())
                .limit(limit)
                .offset(offset)
                .load(conn)?;

            Ok(ListResult {
                items: rows
                    .into_iter()
                    .map(|o| OrderSummary {
                        id: o.id,
                        customer_id: o.customer_id,
                        created_at: o.created_at,
                    })
                    .collect(),
                total,
            })
        })
    }
}
