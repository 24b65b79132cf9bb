use super::job::Job;

/// Channels a job post can be rendered for. Rendering is pure string
/// formatting; delivery happens outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageChannel {
    Telegram,
    Email,
}

impl MessageChannel {
    pub fn parse(value: &str) -> Option<MessageChannel> {
        match value.to_ascii_lowercase().as_str() {
            "telegram" => Some(MessageChannel::Telegram),
            "email" => Some(MessageChannel::Email),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageChannel::Telegram => "telegram",
            MessageChannel::Email => "email",
        }
    }
}

/// Render the outbound message body for a job post
pub fn render_job_message(job: &Job, channel: MessageChannel) -> String {
    match channel {
        MessageChannel::Telegram => {
            let mut body = format!("{} at {} ({})", job.title, job.company, job.location);
            if let Some(salary) = &job.salary_range {
                body.push('\n');
                body.push_str(salary);
            }
            body.push_str("\n\n");
            body.push_str(&job.description);
            if !job.tags.is_empty() {
                let tags: Vec<String> = job
                    .tags
                    .iter()
                    .map(|tag| format!("#{}", tag.replace(char::is_whitespace, "")))
                    .collect();
                body.push_str("\n\n");
                body.push_str(&tags.join(" "));
            }
            body
        }
        MessageChannel::Email => {
            let mut body = format!(
                "Subject: {} at {}\n\nA new position is open at {}.",
                job.title, job.company, job.company
            );
            body.push_str(&format!("\n\nRole: {}\nLocation: {}", job.title, job.location));
            if let Some(salary) = &job.salary_range {
                body.push_str(&format!("\nSalary: {}", salary));
            }
            body.push_str("\n\n");
            body.push_str(&job.description);
            body
        }
    }
}
