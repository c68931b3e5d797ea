use shared::{SessionResponse, User as SharedUser};

use crate::domain::models::user::User as DomainUser;

pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            children: domain.children,
        }
    }

    pub fn to_session_dto(user: Option<DomainUser>) -> SessionResponse {
        SessionResponse {
            is_authenticated: user.is_some(),
            user: user.map(Self::to_dto),
        }
    }
}
