pub mod identity_service;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use identity_service::IdentityService;
pub use use_cases::{
    delete_user::{DeleteUserError, DeleteUserUseCase},
    get_user::{GetUserError, GetUserUseCase},
    list_users::ListUsersUseCase,
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    update_user::{UpdateUserError, UpdateUserUseCase},
};
