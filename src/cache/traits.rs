use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中并取得值
    Found(T),
    /// 键不存在
    NotFound,
    /// 键存在但值不可用（连接失败或反序列化失败）
    ExistsButNoValue,
}

/// 对象缓存后端统一接口
///
/// 值以 JSON 字符串存取，调用方负责序列化。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);

    /// 清空所有缓存项
    async fn invalidate_all(&self);
}
