//! # Accounts - User Account Service Library
//!
//! Facade crate that re-exports the public APIs of the account service components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `CredentialPair`, etc.
//! - **Ports**: `UserStore`, `CredentialManager`, `TokenIssuer`, `TokenVerifier`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc., composed by `IdentityService`
//! - **Adapters**: `PostgresUserStore`, `Argon2CredentialManager`, `JwtTokenIssuer`, etc.
//! - **Service**: `AccountsService`, the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    CredentialPair, Email, EmailError, FieldError, HashedPassword, Password, PasswordError,
    Token, User, UserChanges, UserId, UserUpdate, ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

pub use accounts_core::{
    CredentialError, CredentialManager, TokenError, TokenIssuer, TokenVerifier, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::IdentityService;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and middleware
    pub mod http {
        pub use accounts_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Password hashing
    pub mod credentials {
        pub use accounts_adapters::credentials::*;
    }

    /// JWT issuing and verification
    pub mod tokens {
        pub use accounts_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }
}

pub use accounts_adapters::{
    credentials::{Argon2CredentialManager, HashingParams},
    persistence::{HashMapUserStore, PostgresUserStore},
    tokens::{JwtAuthConfig, JwtTokenIssuer},
};

// ============================================================================
// Accounts Service (Main Entry Point)
// ============================================================================

pub use accounts_service::{AccountsService, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
