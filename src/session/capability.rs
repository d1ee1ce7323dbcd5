use crate::model::{Role, User};

/// Things a signed-in user may or may not do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Dashboard, product browsing, the sales terminal.
    UseTerminal,
    ViewReports,
    /// Create, edit and delete products.
    ManageProducts,
    ViewAdmin,
}

impl Capability {
    /// The role a user needs beyond being signed in, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Capability::UseTerminal | Capability::ViewReports => None,
            Capability::ManageProducts | Capability::ViewAdmin => Some(Role::Admin),
        }
    }
}

/// Single source of truth for role checks. Nobody signed in means no access.
pub fn allows(user: Option<&User>, capability: Capability) -> bool {
    let Some(user) = user else {
        return false;
    };
    match capability.required_role() {
        None => true,
        Some(role) => user.role == role,
    }
}

pub fn can_manage_products(user: Option<&User>) -> bool {
    allows(user, Capability::ManageProducts)
}

pub fn can_view_admin(user: Option<&User>) -> bool {
    allows(user, Capability::ViewAdmin)
}
