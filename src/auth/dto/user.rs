use uuid::Uuid;

///
/// User information retrieved from the JWT.
///
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: Uuid,
}
