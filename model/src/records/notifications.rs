use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum NotificationKind {
    Alert,
    Success,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Human readable, e.g. "Today, 10:45 AM".
    pub time: String,
    pub read: bool,
    pub kind: NotificationKind,
}

/// The notification list with its read/delete operations.
///
/// Operations on ids that are not in the feed are no-ops and return `false`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn sample() -> Self {
        use NotificationKind::*;
        let item = |id, title: &str, message: &str, time: &str, read, kind| Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
            kind,
        };
        Self::new(vec![
            item(
                1,
                "Low Feed Stock Alert",
                "Feed stock for Coup #3 is below 20%. Please restock soon.",
                "Today, 10:45 AM",
                false,
                Alert,
            ),
            item(
                2,
                "Production Target Reached",
                "Congratulations! Egg production target for this week has been reached.",
                "Yesterday, 3:20 PM",
                true,
                Success,
            ),
            item(
                3,
                "New Customer Added",
                "A new customer 'Sunshine Grocers' has been added to your customer list.",
                "June 14, 9:15 AM",
                false,
                Info,
            ),
            item(
                4,
                "Mortality Rate Increase",
                "There has been a 2% increase in mortality rate in Coup #2. Please check.",
                "June 12, 11:30 AM",
                false,
                Alert,
            ),
            item(
                5,
                "System Update",
                "The system will undergo maintenance on June 20 from 2:00 AM to 4:00 AM.",
                "June 10, 5:45 PM",
                true,
                Info,
            ),
        ])
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_has_three_unread() {
        assert_eq!(NotificationFeed::sample().unread_count(), 3);
    }

    #[test]
    fn mark_read_and_delete() {
        let mut feed = NotificationFeed::sample();
        assert!(feed.mark_read(1));
        assert_eq!(feed.unread_count(), 2);
        assert!(feed.mark_read(1));
        assert_eq!(feed.unread_count(), 2);

        assert!(feed.delete(3));
        assert_eq!(feed.unread_count(), 1);
        assert_eq!(feed.items().len(), 4);

        assert!(!feed.delete(3));
        assert!(!feed.mark_read(42));
    }

    #[test]
    fn mark_all_read_clears_badge() {
        let mut feed = NotificationFeed::sample();
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
        assert_eq!(feed.items().len(), 5);
    }
}
