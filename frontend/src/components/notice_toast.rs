use leptos::prelude::*;
use wavescan::Notice;
use wavescan::config::NOTICE_TTL;

/// 右上角通知
///
/// 每条通知出现后定时清除；清除时按 ID 匹配，期间出现的新通知不受影响。
#[component]
pub fn NoticeToast(
    #[prop(into)] notice: Signal<Option<Notice>>,
    /// 按 ID 清除
    on_dismiss: impl Fn(uuid::Uuid) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let dismiss = on_dismiss.clone();
    Effect::new(move |_| {
        if let Some(id) = notice.with(|n| n.as_ref().map(|n| n.id)) {
            let dismiss = dismiss.clone();
            set_timeout(move || dismiss(id), NOTICE_TTL);
        }
    });

    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            let id = n.id;
            let dismiss = on_dismiss.clone();
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class on:click=move |_| dismiss(id)>
                        <span>{n.message}</span>
                    </div>
                </div>
            }
        })
    }
}
