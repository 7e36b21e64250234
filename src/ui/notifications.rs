//! Toast notifications
//!
//! Success and failure messages raised by the auth forms are queued in a
//! [`NotificationManager`] and rendered by a single [`NotificationsContainer`]
//! mounted at the app root.

use crate::core::{Notification, NotificationType, Notifier};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer(
    /// Manager whose queue is rendered
    manager: NotificationManager,
) -> impl IntoView {
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || notifications.get()
                key=|item| item.id
                let:item
            >
                <NotificationToast item=item manager=manager />
            </For>
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                manager.dismiss(id);
            });
        }
    }

    let (bg_class, border_class, icon_class) = match notification.notification_type {
        NotificationType::Success => ("bg-green-500/10", "border-green-500/30", "text-green-400"),
        NotificationType::Error => ("bg-red-500/10", "border-red-500/30", "text-red-400"),
    };

    let icon_path = match notification.notification_type {
        NotificationType::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        NotificationType::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let role = if notification.is_error() { "alert" } else { "status" };
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border bg-white shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <div
            role=role
            class=container_class
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <div class=icon_class>
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-gray-800">{notification.title}</h4>
                <p class="text-xs text-gray-600 mt-0.5">{notification.message}</p>
            </div>
            <button
                type="button"
                class="text-gray-400 hover:text-gray-700 transition-colors"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Signal-backed notification queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Remove a notification by ID
    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| n.retain(|i| i.id != id));
    }
}

impl Notifier for NotificationManager {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_queue_is_capped() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            for i in 0..7 {
                manager.success("Login", format!("message {}", i));
            }

            let queue = manager.notifications().get_untracked();
            assert_eq!(queue.len(), MAX_NOTIFICATIONS);
            assert_eq!(queue.front().map(|i| i.id), Some(2));
            assert_eq!(queue.back().map(|i| i.notification.message.as_str()), Some("message 6"));
        });
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            manager.error("Signup", "Error: Email already in use");
            manager.success("Login", "Login successful");

            manager.dismiss(0);

            let queue = manager.notifications().get_untracked();
            assert_eq!(queue.len(), 1);
            assert_eq!(queue[0].notification.message, "Login successful");
        });
    }
}
