use async_graphql::{InputObject, SimpleObject};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// 令牌实体
///
/// `id` 缺省时自动生成；`expiration` 单位为秒，每次保存都会被服务端配置的 TTL 覆盖。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct Token {
    #[serde(default = "Uuid::new_v4", deserialize_with = "id_or_generate")]
    pub id: Uuid,
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_expiration")]
    pub expiration: u64,
}

/// `"id": null` 与缺省同样处理
fn id_or_generate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_else(Uuid::new_v4))
}

/// 调用方给的值反正会被覆盖，无法表示为秒数的一律当作 0
fn lenient_expiration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(serde_json::Value::deserialize(deserializer)?
        .as_u64()
        .unwrap_or_default())
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            expiration: 0,
        }
    }

    /// 存储键，即 id 的字符串形式
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// GraphQL `createToken` 的输入
#[derive(Debug, InputObject)]
pub struct TokenInput {
    pub id: Option<Uuid>,
    pub value: String,
    /// 接受但忽略，保存时以服务端 TTL 为准
    pub expiration: Option<i64>,
}

impl From<TokenInput> for Token {
    fn from(input: TokenInput) -> Self {
        let TokenInput { id, value, .. } = input;
        Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            value,
            expiration: 0,
        }
    }
}
