//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly, bypassing service rules,
//! so tests can arrange states the services would refuse to create (for example a booking
//! that has already ended).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let item = factory::item::create_item(&db, owner.id).await?;
//!
//! let (owner, booker, item) = factory::helpers::create_item_with_booker(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .status("APPROVED")
//!     .start(Utc::now() - Duration::days(2))
//!     .end(Utc::now() - Duration::days(1))
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;
