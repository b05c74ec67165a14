use utoipa::OpenApi;

use crate::handlers::{customers, orders, products};

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::create_customer,
        products::create_product,
        orders::create_order,
        orders::get_order,
        orders::list_orders,
    ),
    components(schemas(
        customers::CreateCustomerRequest,
        customers::CustomerResponse,
        products::CreateProductRequest,
        products::ProductResponse,
        orders::CreateOrderRequest,
        orders::RequestedProductRequest,
        orders::OrderResponse,
        orders::OrderedProductResponse,
        orders::OrderSummaryResponse,
        orders::ListOrdersResponse,
    )),
    tags(
        (name = "customers", description = "Customer registration"),
        (name = "products", description = "Product catalogue and stock"),
        (name = "orders", description = "Order placement and lookup"),
    )
)]
pub struct ApiDoc;
