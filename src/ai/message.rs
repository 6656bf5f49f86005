use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message as the vendors expect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Builds the chat sequence: the system prompt first, then the history
/// as alternating user and assistant turns. An odd-length history ends
/// with the question being asked.
pub fn build_messages(prompt: &str, history: &[String]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::new(Role::System, prompt));

    for pair in history.chunks(2) {
        messages.push(Message::new(Role::User, &pair[0]));
        if let Some(answer) = pair.get(1) {
            messages.push(Message::new(Role::Assistant, answer));
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn roles(messages: &[Message]) -> Vec<Role> {
        messages.iter().map(Message::role).collect()
    }

    #[test]
    fn empty_history_yields_system_only() {
        let messages = build_messages("prompt", &[]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[0].content(), "prompt");
    }

    #[test]
    fn roles_alternate_after_system() {
        for n in 0..6 {
            let items: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            let messages = build_messages("p", &items);
            assert_eq!(messages.len(), n + 1);

            for (i, message) in messages.iter().enumerate().skip(1) {
                let expected = if i % 2 == 1 { Role::User } else { Role::Assistant };
                assert_eq!(message.role(), expected);
                assert_eq!(message.content(), items[i - 1]);
            }
        }
    }

    #[test]
    fn odd_history_ends_with_user() {
        let messages = build_messages("p", &history(&["q1", "a1", "q2"]));
        assert_eq!(
            roles(&messages),
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages.last().unwrap().content(), "q2");
    }

    #[test]
    fn serializes_lowercase_roles() {
        let messages = build_messages("p", &history(&["hello"]));
        let json = serde_json::to_value(&messages).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "p"},
                {"role": "user", "content": "hello"}
            ])
        );
    }
}
