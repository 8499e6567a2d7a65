//! # Restaurant Menu
//!
//! Two console programs sharing one menu file:
//!
//! - **`menu-editor`** builds the menu: add, delete, modify and display dishes, then save.
//! - **`order-taker`** loads the saved menu, takes an order by dish number and prints the total.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic [`ResourceActor`](framework::ResourceActor) owns an ordered store and applies
//! create / get / list / update / delete requests one at a time. Entities plug in through
//! [`ActorEntity`](framework::ActorEntity), whose hooks validate every change.
//!
//! ### 2. The Data ([`model`])
//! [`Dish`](model::Dish) with its [`DishKind`](model::DishKind) variants (only soups carry
//! spiciness), the [`DishRecord`](model::DishRecord) file format, and the
//! [`Order`](model::Order) aggregate.
//!
//! ### 3. The Menu Store ([`dish_actor`], [`clients`])
//! The Dish actor and the [`MenuClient`](clients::MenuClient) the editor talks to.
//!
//! ### 4. The Programs ([`editor`], [`ordering`])
//! Console flows, written against [`Console`](console::Console) so they run the same on a
//! terminal and on scripted input.
//!
//! ### 5. The Plumbing ([`storage`], [`lifecycle`], [`config`])
//! Menu file I/O, actor start-up and shutdown, tracing setup, and the `--menu` option.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin menu-editor -- --menu menu.json
//! cargo run --bin order-taker -- --menu menu.json
//! RUST_LOG=info cargo run --bin menu-editor
//! ```

pub mod clients;
pub mod config;
pub mod console;
pub mod dish_actor;
pub mod editor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod ordering;
pub mod storage;
