// aa-questions - poke at a questions database from the terminal
//
// Parses CLI args, opens the database once and dispatches to handlers.

use aa_questions_lib::{
    logging, Config, Database, Question, QuestionsError, Reply, Result, User,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a questions/replies/likes SQLite database.")]
struct Cli {
    /// Database file (overrides QUESTIONS_DB).
    #[arg(long, value_name = "PATH", global = true)]
    db: Option<PathBuf>,

    /// Print records as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log every round trip to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the tables if they don't exist
    Init,
    /// Row counts per table
    Stats,
    /// List every user
    Users,
    /// Show a user and what they wrote
    User { id: i64 },
    /// Show a question with its author, likes and followers
    Question { id: i64 },
    /// Print the reply tree of a question
    Thread { question_id: i64 },
    /// Questions with the most likes
    TopLiked {
        #[arg(default_value_t = 5)]
        n: u32,
    },
    /// Questions with the most followers
    TopFollowed {
        #[arg(default_value_t = 5)]
        n: u32,
    },
    /// Average karma of a user
    Karma { user_id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.debug) {
        eprintln!("{}", e.user_message());
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().with_database_path(cli.db);
    let db = Database::open(&config.database_path).await?;
    let out = Output { json: cli.json };

    let result = match cli.command {
        Command::Init => handle_init(&db).await,
        Command::Stats => handle_stats(&db, &out).await,
        Command::Users => handle_users(&db, &out).await,
        Command::User { id } => handle_user(&db, &out, id).await,
        Command::Question { id } => handle_question(&db, &out, id).await,
        Command::Thread { question_id } => handle_thread(&db, &out, question_id).await,
        Command::TopLiked { n } => handle_top_liked(&db, &out, n).await,
        Command::TopFollowed { n } => handle_top_followed(&db, &out, n).await,
        Command::Karma { user_id } => handle_karma(&db, &out, user_id).await,
    };

    db.close().await;
    result
}

async fn handle_init(db: &Database) -> Result<()> {
    db.initialize_schema().await?;
    println!("Schema ready at {}", db.path().display());
    Ok(())
}

async fn handle_stats(db: &Database, out: &Output) -> Result<()> {
    let stats = db.stats().await?;
    out.value(&stats, |s| {
        format!(
            "users: {}\nquestions: {}\nreplies: {}\nfollows: {}\nlikes: {}",
            s.users, s.questions, s.replies, s.follows, s.likes
        )
    })
}

async fn handle_top_liked(db: &Database, out: &Output, n: u32) -> Result<()> {
    let questions = Question::most_liked(db, n).await?.unwrap_or_default();
    out.questions(&questions)
}

async fn handle_top_followed(db: &Database, out: &Output, n: u32) -> Result<()> {
    let questions = Question::most_followed(db, n).await?.unwrap_or_default();
    out.questions(&questions)
}

async fn handle_users(db: &Database, out: &Output) -> Result<()> {
    let users = User::all(db).await?;
    if users.is_empty() && !out.json {
        println!("No users.");
        return Ok(());
    }
    out.value(&users, |users| {
        users.iter().map(|u| u.to_string()).collect::<Vec<_>>().join("\n")
    })
}

async fn handle_user(db: &Database, out: &Output, id: i64) -> Result<()> {
    let user = find_user(db, id).await?;
    let questions = user.authored_questions(db).await?.unwrap_or_default();
    let replies = user.authored_replies(db).await?.unwrap_or_default();

    #[derive(Serialize)]
    struct Profile<'a> {
        user: &'a User,
        questions: &'a [Question],
        replies: &'a [Reply],
    }

    let profile = Profile {
        user: &user,
        questions: &questions,
        replies: &replies,
    };

    out.value(&profile, |p| {
        let mut lines = vec![p.user.to_string()];
        lines.push(format!("Questions ({}):", p.questions.len()));
        lines.extend(p.questions.iter().map(|q| format!("  #{} {}", q.id, q.title)));
        lines.push(format!("Replies ({}):", p.replies.len()));
        lines.extend(
            p.replies
                .iter()
                .map(|r| format!("  #{} on question {}: {}", r.id, r.question_id, r.body)),
        );
        lines.join("\n")
    })
}

async fn handle_question(db: &Database, out: &Output, id: i64) -> Result<()> {
    let question = find_question(db, id).await?;
    let author = question.author(db).await?;
    let likes = question.num_likes(db).await?;
    let followers = question.followers(db).await?.unwrap_or_default();

    #[derive(Serialize)]
    struct Detail<'a> {
        question: &'a Question,
        author: Option<&'a User>,
        likes: i64,
        followers: &'a [User],
    }

    let detail = Detail {
        question: &question,
        author: author.as_ref(),
        likes,
        followers: &followers,
    };

    out.value(&detail, |d| {
        let by = d
            .author
            .map(|a| format!("{} {}", a.fname, a.lname))
            .unwrap_or_else(|| "unknown author".to_string());
        format!(
            "#{} {}\n  by {}\n  {}\n  likes: {}  followers: {}",
            d.question.id,
            d.question.title,
            by,
            d.question.body,
            d.likes,
            d.followers.len()
        )
    })
}

/// Walk the tree one level at a time, depth first
async fn handle_thread(db: &Database, out: &Output, question_id: i64) -> Result<()> {
    let question = find_question(db, question_id).await?;
    let roots: Vec<Reply> = question
        .replies(db)
        .await?
        .unwrap_or_default()
        .into_iter()
        .filter(Reply::is_root)
        .collect();

    let mut ordered: Vec<(usize, Reply)> = Vec::new();
    let mut stack: Vec<(usize, Reply)> = roots.into_iter().rev().map(|r| (0, r)).collect();

    while let Some((depth, reply)) = stack.pop() {
        if let Some(children) = reply.child_replies(db).await? {
            stack.extend(children.into_iter().rev().map(|c| (depth + 1, c)));
        }
        ordered.push((depth, reply));
    }

    out.value(&ordered, |nodes| {
        let mut lines = vec![format!("#{} {}", question.id, question.title)];
        lines.extend(nodes.iter().map(|(depth, r)| {
            format!("{}- [{}] user {}: {}", "  ".repeat(depth + 1), r.id, r.user_id, r.body)
        }));
        lines.join("\n")
    })
}

async fn handle_karma(db: &Database, out: &Output, user_id: i64) -> Result<()> {
    let user = find_user(db, user_id).await?;
    let karma = user.average_karma(db).await?;
    out.value(&karma, |k| format!("{}: {:.3}", user, k))
}

async fn find_user(db: &Database, id: i64) -> Result<User> {
    User::find_by_id(db, id)
        .await?
        .ok_or_else(|| QuestionsError::NotFound(format!("User {}", id)))
}

async fn find_question(db: &Database, id: i64) -> Result<Question> {
    Question::find_by_id(db, id)
        .await?
        .ok_or_else(|| QuestionsError::NotFound(format!("Question {}", id)))
}

struct Output {
    json: bool,
}

impl Output {
    fn value<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }

    fn questions(&self, questions: &[Question]) -> Result<()> {
        if questions.is_empty() && !self.json {
            println!("No questions found.");
            return Ok(());
        }
        self.value(questions, |qs| {
            qs.iter()
                .enumerate()
                .map(|(i, q)| format!("{:3}. #{} {}", i + 1, q.id, q.title))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(db: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["aa-questions", "--db", db.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_query_errors_flow_through_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bare.db");

        // No schema yet: every query command must surface the store error
        let commands: [&[&str]; 3] = [&["stats"], &["top-liked", "3"], &["top-followed"]];
        for args in commands {
            let result = run(cli(&path, args)).await;
            assert!(matches!(result, Err(QuestionsError::Database(_))), "{:?}", args);
        }

        // The file is still usable after the failed runs
        run(cli(&path, &["init"])).await.unwrap();
        run(cli(&path, &["stats"])).await.unwrap();
        run(cli(&path, &["top-liked", "3"])).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_records_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.db");
        run(cli(&path, &["init"])).await.unwrap();

        let result = run(cli(&path, &["user", "7"])).await;
        assert!(matches!(result, Err(QuestionsError::NotFound(_))));

        let result = run(cli(&path, &["thread", "1"])).await;
        assert!(matches!(result, Err(QuestionsError::NotFound(_))));
    }
}
