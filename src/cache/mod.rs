// 缓存模块
// 令牌的过期键值存储：接口定义与 Redis / 内存两种实现

pub mod keys;
pub mod operations;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use operations::{MemoryTokenStore, RedisTokenStore};
pub use store::{StoreError, TokenStore};
