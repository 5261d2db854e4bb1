/// Plain-text output for users, notices and the dashboard
use flowdesk_core::{count_label, User};
use flowdesk_sync::{DirectoryStats, Notice, NoticeLevel};
use std::io::{self, Write};

/// Write the user table followed by the count line.
pub fn user_list<W: Write>(
    out: &mut W,
    users: &[User],
    query: &str,
    show_email: bool,
) -> io::Result<()> {
    if users.is_empty() {
        if query.is_empty() {
            writeln!(out, "No users yet")?;
            writeln!(out, "Get started by adding your first user.")?;
        } else {
            writeln!(out, "No users found")?;
            writeln!(out, "Try adjusting your search criteria.")?;
        }
        return Ok(());
    }

    for user in users {
        write!(out, "{:>14}  {}  @{}", user.id, user.name, user.username)?;
        if show_email {
            write!(out, "  <{}>", user.email)?;
        }
        if !user.company.name.is_empty() {
            write!(out, "  [{}]", user.company.name)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", count_label(users.len()))
}

pub fn user_detail<W: Write>(out: &mut W, user: &User) -> io::Result<()> {
    writeln!(out, "{} (@{})", user.name, user.username)?;
    writeln!(out, "  id:       {}", user.id)?;
    writeln!(out, "  email:    {}", user.email)?;
    writeln!(out, "  phone:    {}", user.phone)?;
    writeln!(out, "  website:  {}", user.website)?;

    let address = &user.address;
    if !address.city.is_empty() {
        writeln!(
            out,
            "  address:  {} {}, {} {}",
            address.street, address.suite, address.city, address.zipcode
        )?;
    }

    let company = &user.company;
    if !company.name.is_empty() {
        writeln!(out, "  company:  {}", company.name)?;
        if !company.catch_phrase.is_empty() {
            writeln!(out, "            \"{}\"", company.catch_phrase)?;
        }
    }

    Ok(())
}

pub fn dashboard<W: Write>(out: &mut W, stats: &DirectoryStats) -> io::Result<()> {
    writeln!(out, "FlowDesk Technologies")?;
    writeln!(out, "  Total Users:      {}", stats.total_users)?;
    writeln!(out, "  Companies:        {}", stats.companies)?;
    writeln!(out, "  Cities:           {}", stats.cities)?;
    writeln!(out, "  Website domains:  {}", stats.website_domains)
}

pub fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let marker = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    writeln!(out, "[{}] {}", marker, notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdesk_core::{CreateUserData, UserId};

    fn user(id: i64, name: &str) -> User {
        User::from_submission(
            UserId::new(id),
            CreateUserData {
                name: name.to_string(),
                username: name.to_lowercase(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "555".to_string(),
                website: "https://example.com".to_string(),
            },
        )
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_ends_with_count() {
        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let text = render(|out| user_list(out, &users, "", true));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Ann"));
        assert!(lines[1].contains("Bob"));
        assert_eq!(lines[2], "2 users");
    }

    #[test]
    fn test_list_hides_email_when_disabled() {
        let users = vec![user(1, "Ann")];
        let shown = render(|out| user_list(out, &users, "", true));
        let hidden = render(|out| user_list(out, &users, "", false));

        assert!(shown.contains("ann@example.com"));
        assert!(!hidden.contains("ann@example.com"));
        assert!(hidden.ends_with("1 user\n"));
    }

    #[test]
    fn test_empty_states() {
        let no_match = render(|out| user_list(out, &[], "zzz", true));
        assert!(no_match.starts_with("No users found"));

        let empty = render(|out| user_list(out, &[], "", true));
        assert!(empty.starts_with("No users yet"));
    }

    #[test]
    fn test_notice_line() {
        let text = render(|out| notice(out, &Notice::user_created("Bob")));
        assert_eq!(text, "[ok] User created: Bob has been added successfully.\n");

        let text = render(|out| notice(out, &Notice::delete_failed()));
        assert!(text.starts_with("[error] Error deleting user"));
    }

    #[test]
    fn test_dashboard_figures() {
        let stats = DirectoryStats {
            total_users: 10,
            companies: 9,
            cities: 8,
            website_domains: 7,
        };
        let text = render(|out| dashboard(out, &stats));
        assert!(text.contains("Total Users:      10"));
        assert!(text.contains("Website domains:  7"));
    }
}
