/// 存储实现

// Redis 存储
pub mod redis_store;

// 进程内存储，用于测试和无 Redis 运行
pub mod memory_store;

pub use memory_store::MemoryTokenStore;
pub use redis_store::RedisTokenStore;
