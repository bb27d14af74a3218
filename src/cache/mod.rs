//! 对象缓存层
//!
//! 通过插件注册机制支持多种缓存后端（moka 内存缓存 / redis），
//! 具体后端由配置 `cache.type` 决定。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在程序启动时（main 之前）通过 ctor 将构造函数写入注册表，
/// 由 `runtime::lifetime::startup` 按配置选择实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let plugin = <$plugin>::new()
                                .map_err($crate::errors::EduSightError::cache_connection)?;
                            Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
