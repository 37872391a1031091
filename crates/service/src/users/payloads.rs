use models::User;

/// Request for a single user by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowPayload {
    pub id: i64,
}

/// Optional id filter for listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListPayload {
    pub id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeletePayload {
    pub id: i64,
}

/// Full replacement record; partial updates are not supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePayload {
    pub user: User,
}
