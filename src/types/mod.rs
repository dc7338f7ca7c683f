// 子模块声明
pub mod auth;
pub mod master;

// 重新导出所有公共类型
pub use auth::*;
pub use master::*;

use std::collections::BTreeMap;

/// Command-line style flags forwarded to an embedded process, keyed by flag name
pub type ExtendedArguments = BTreeMap<String, Vec<String>>;
