use dioxus::prelude::*;
use model::records::notifications::Notification;
use model::records::notifications::NotificationKind;

use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_toast::use_toast;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Alert => "⚠️",
        NotificationKind::Success => "✅",
        NotificationKind::Info => "ℹ️",
    }
}

fn visible(items: &[Notification], unread_only: bool) -> Vec<Notification> {
    items.iter().filter(|n| !unread_only || !n.read).cloned().collect()
}

#[component]
pub fn NotificationsScreen() -> Element {
    let mut feed = use_context::<AppStateMut>().notifications;
    let toast = use_toast();
    let mut unread_only = use_signal(|| false);

    let unread = feed.read().unread_count();
    let items = visible(feed.read().items(), unread_only());

    rsx! {
        section {
            div {
                class: "toolbar",
                div {
                    role: "group",
                    button {
                        class: if unread_only() { "outline" } else { "" },
                        onclick: move |_| unread_only.set(false),
                        "All"
                    }
                    button {
                        class: if unread_only() { "" } else { "outline" },
                        onclick: move |_| unread_only.set(true),
                        "Unread ({unread})"
                    }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: unread == 0,
                    on_click: move |_| {
                        feed.write().mark_all_read();
                        toast.success("Notifications", "All notifications marked as read");
                    },
                    "Mark all as read"
                }
            }
            if items.is_empty() {
                EmptyState {
                    icon: "🔔",
                    title: if unread_only() { "No unread notifications" } else { "No notifications" },
                    description: "You're all caught up.",
                }
            } else {
                for notification in items {
                    Card {
                        key: "{notification.id}",
                        div {
                            class: if notification.read { "notification" } else { "notification unread" },
                            span { class: "notification-icon {notification.kind.label()}", "{kind_icon(notification.kind)}" }
                            div {
                                strong { "{notification.title}" }
                                p { "{notification.message}" }
                                small { class: "muted", "{notification.time}" }
                            }
                            div {
                                class: "notification-actions",
                                if !notification.read {
                                    a {
                                        href: "#",
                                        onclick: move |evt| {
                                            evt.prevent_default();
                                            feed.write().mark_read(notification.id);
                                        },
                                        "Mark as read"
                                    }
                                }
                                a {
                                    href: "#",
                                    class: "secondary",
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        if feed.write().delete(notification.id) {
                                            toast.success("Notification Deleted", "The notification has been removed");
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use model::records::notifications::NotificationFeed;

    use super::*;

    #[test]
    fn unread_filter_hides_read_items() {
        let mut feed = NotificationFeed::sample();
        let total = feed.items().len();
        assert_eq!(visible(feed.items(), false).len(), total);
        assert_eq!(visible(feed.items(), true).len(), 3);

        feed.mark_all_read();
        assert!(visible(feed.items(), true).is_empty());
        assert_eq!(visible(feed.items(), false).len(), total);
    }
}
