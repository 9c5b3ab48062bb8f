// 从磁盘目录提供 webroot 静态资源。
pub mod provider_disk;
