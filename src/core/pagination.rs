//! 分页计算

/// 总页数：`ceil(total / page_size)`，`page_size` 为0时视为0页
pub fn page_count(total: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// 取第 `page` 页（从1开始）的切片，越界时返回空切片
pub fn page_slice<T>(source: &[T], page: u32, limit: u32) -> &[T] {
    if page == 0 || limit == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(limit as usize);
    if start >= source.len() {
        return &[];
    }
    let end = start.saturating_add(limit as usize).min(source.len());
    &source[start..end]
}

/// 分页请求对应的 `skip` 偏移量
pub fn skip_for(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}
