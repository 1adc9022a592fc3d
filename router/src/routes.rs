//! The storefront route table.

/// Default application title, used as the page title suffix.
pub const APP_TITLE: &str = "药品销售系统";

/// A navigable route and its access requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Stable route name.
    pub name: &'static str,
    /// Path pattern; `:segment` matches any single segment.
    pub path: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Whether the route requires a logged-in session.
    pub requires_auth: bool,
    /// Whether the route additionally requires the admin role.
    pub requires_admin: bool,
}

impl Route {
    const fn public(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: false,
            requires_admin: false,
        }
    }

    const fn authed(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: true,
            requires_admin: false,
        }
    }

    const fn admin(name: &'static str, path: &'static str, title: &'static str) -> Self {
        Self {
            name,
            path,
            title,
            requires_auth: true,
            requires_admin: true,
        }
    }

    /// Compose the full page title for this route.
    #[must_use]
    pub fn page_title(&self, app_title: &str) -> String {
        format!("{} - {}", self.title, app_title)
    }
}

/// Fallback route for paths that match nothing.
pub const NOT_FOUND: Route = Route::public("NotFound", "/:pathMatch", "页面不存在");

/// Every route the storefront knows about, in match order.
pub const ROUTES: &[Route] = &[
    Route::public("Home", "/", "首页"),
    Route::public("ProductList", "/products", "药品列表"),
    Route::public("ProductDetail", "/products/:id", "药品详情"),
    Route::authed("Cart", "/cart", "购物车"),
    Route::authed("OrderList", "/orders", "我的订单"),
    Route::authed("OrderDetail", "/orders/:id", "订单详情"),
    Route::authed("Profile", "/me", "个人中心"),
    Route::admin("AdminCategories", "/admin/categories", "分类管理"),
    Route::admin("AdminProducts", "/admin/products", "药品管理"),
    Route::admin("AdminBanners", "/admin/banners", "轮播图管理"),
    Route::admin("AdminOrders", "/admin/orders", "订单管理"),
    Route::admin("AdminUsers", "/admin/users", "用户管理"),
    Route::public("Login", "/login", "登录"),
    Route::public("Register", "/register", "注册"),
];

/// Resolve a concrete path against the route table.
///
/// Pattern segments starting with `:` match any single path segment;
/// unmatched paths resolve to [`NOT_FOUND`].
#[must_use]
pub fn resolve(path: &str) -> &'static Route {
    let requested: Vec<&str> = segments(path);

    ROUTES
        .iter()
        .find(|route| {
            let pattern = segments(route.path);
            pattern.len() == requested.len()
                && pattern
                    .iter()
                    .zip(&requested)
                    .all(|(p, r)| p.starts_with(':') || p == r)
        })
        .unwrap_or(&NOT_FOUND)
}

fn segments(path: &str) -> Vec<&str> {
    // Ignore query and fragment; "/" yields no segments.
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths_resolve() {
        assert_eq!(resolve("/").name, "Home");
        assert_eq!(resolve("/cart").name, "Cart");
        assert_eq!(resolve("/admin/users").name, "AdminUsers");
        assert_eq!(resolve("/login").name, "Login");
    }

    #[test]
    fn test_dynamic_segments_resolve() {
        assert_eq!(resolve("/products/42").name, "ProductDetail");
        assert_eq!(resolve("/orders/7").name, "OrderDetail");
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(resolve("/products?keyword=aspirin").name, "ProductList");
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(resolve("/nope").name, "NotFound");
        assert_eq!(resolve("/products/1/extra").name, "NotFound");
    }

    #[test]
    fn test_requirement_flags() {
        assert!(!resolve("/products").requires_auth);
        assert!(resolve("/cart").requires_auth);
        assert!(!resolve("/cart").requires_admin);
        assert!(resolve("/admin/orders").requires_admin);
    }

    #[test]
    fn test_page_title_composition() {
        assert_eq!(resolve("/cart").page_title(APP_TITLE), "购物车 - 药品销售系统");
    }
}
