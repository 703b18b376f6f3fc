//! 分页加载状态机
//!
//! 每个列表页面持有一个 `PageLoader`：
//! `Idle -> Loading -> {Success, Failure}`，由 `load` 驱动。
//!
//! 请求在 tokio 运行时上执行，结果带着请求编号经通道送回界面线程。
//! 只有编号等于最近一次请求的结果才会生效，较早发出但较晚返回的响应会被丢弃。

use crate::core::error::FetchError;
use crate::core::models::{PaginationData, Record};
use crate::core::source::DataSource;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;

/// 加载状态
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// 尚未发起请求
    Idle,
    /// 请求进行中
    Loading,
    /// 加载成功
    Success(PaginationData<T>),
    /// 加载失败（错误描述）
    Failure(String),
}

/// 请求完成后的通知回调（通常用于触发界面重绘）
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// 一次请求的结果
struct Completion<T> {
    request_id: u64,
    page: u32,
    result: Result<PaginationData<T>, FetchError>,
}

/// 分页加载器
pub struct PageLoader<T: Record> {
    /// 数据源
    source: DataSource,
    /// 异步运行时
    runtime: Handle,
    /// 当前页码
    page: u32,
    /// 每页条数
    limit: u32,
    /// 当前状态
    state: LoadState<T>,
    /// 最近一次请求的编号（单调递增）
    latest_request: u64,
    tx: Sender<Completion<T>>,
    rx: Receiver<Completion<T>>,
    notifier: Option<Notifier>,
}

impl<T: Record> PageLoader<T> {
    /// 创建加载器，初始停在第1页、尚未请求
    pub fn new(source: DataSource, runtime: Handle, limit: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            runtime,
            page: 1,
            limit: limit.max(1),
            state: LoadState::Idle,
            latest_request: 0,
            tx,
            rx,
            notifier: None,
        }
    }

    /// 设置完成通知
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// 已加载的数据
    pub fn data(&self) -> Option<&PaginationData<T>> {
        match &self.state {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    /// 首次进入页面时加载当前页
    pub fn ensure_loaded(&mut self) {
        if matches!(self.state, LoadState::Idle) {
            self.load(self.page);
        }
    }

    /// 重新加载当前页
    pub fn reload(&mut self) {
        self.load(self.page);
    }

    /// 加载指定页，返回本次请求编号
    pub fn load(&mut self, page: u32) -> u64 {
        let request_id = self.begin(page);

        let source = self.source.clone();
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();
        let limit = self.limit;

        self.runtime.spawn(async move {
            let result = source.fetch::<T>(page, limit).await;
            if tx.send(Completion { request_id, page, result }).is_err() {
                tracing::debug!("页面已卸载，丢弃请求 #{} 的结果", request_id);
                return;
            }
            if let Some(notify) = notifier {
                notify();
            }
        });

        request_id
    }

    /// 进入加载状态并分配新的请求编号
    fn begin(&mut self, page: u32) -> u64 {
        self.latest_request += 1;
        self.page = page;
        self.state = LoadState::Loading;
        tracing::info!(
            "加载 {:?} 第 {} 页（每页 {} 条），请求 #{}",
            T::KIND,
            page,
            self.limit,
            self.latest_request
        );
        self.latest_request
    }

    /// 取回已完成的请求，返回状态是否发生变化
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// 应用一次请求结果，过期的结果被忽略
    fn apply(&mut self, completion: Completion<T>) -> bool {
        if completion.request_id != self.latest_request {
            tracing::debug!(
                "丢弃过期响应 #{}（第 {} 页），最新请求为 #{}",
                completion.request_id,
                completion.page,
                self.latest_request
            );
            return false;
        }

        self.state = match completion.result {
            Ok(data) => {
                tracing::debug!(
                    "{:?} 第 {} 页加载完成：{} 条，共 {} 条",
                    T::KIND,
                    data.page,
                    data.items.len(),
                    data.total
                );
                LoadState::Success(data)
            }
            Err(e) => {
                tracing::warn!("{:?} 第 {} 页加载失败: {}", T::KIND, completion.page, e);
                LoadState::Failure(e.to_string())
            }
        };
        true
    }

    /// 是否可以翻到上一页
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// 是否可以翻到下一页
    pub fn can_next(&self) -> bool {
        self.data().is_some_and(|data| self.page < data.pages)
    }

    /// 上一页，已在首页时不做任何事
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.load(self.page - 1);
        true
    }

    /// 下一页，已在末页或尚未加载时不做任何事
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.load(self.page + 1);
        true
    }
}
