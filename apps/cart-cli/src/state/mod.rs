//! # State Module
//!
//! State shared by the `shopcart` commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  main()                                                                 │
//! │    ├── CliConfig::from_env()      read-only after startup               │
//! │    └── command::run(args, ...)                                          │
//! │              │                                                          │
//! │              ▼                                                          │
//! │        ┌──────────────┐                                                 │
//! │        │  CartState   │   Arc<Mutex<ShoppingCart>>                      │
//! │        │              │   one per command invocation                    │
//! │        └──────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::{CartState, CartSummary, GroupSummary};
