use crate::cli::opts::*;
use crate::{config, words};

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{stdin, stdout, Write};
use std::sync::Arc;
use uuid::Uuid;
use vocaloop_core::{
    select_by_priority, select_with_backfill, summarize, MemoryBackend, QuizSession, ReviewKind,
    StudyBackend, StudySession,
};
use vocaloop_client::HttpBackend;

pub async fn run_cli(args: Cli) -> Result<()> {
    match args.cmd.clone() {
        Command::Login { token } => {
            config::save_token(&token)?;
            println!("token saved");
            Ok(())
        }
        Command::Words(cmd) => {
            let (backend, token) = open_backend(&args)?;
            words_cmd(backend, &token, cmd).await
        }
        Command::Study(cmd) => {
            let (backend, token) = open_backend(&args)?;
            study_cmd(backend, &token, cmd).await
        }
        Command::Quiz(cmd) => {
            let (backend, token) = open_backend(&args)?;
            let kind = review_kind(&cmd.kind);
            run_quiz(backend, &token, kind, cmd.seed).await
        }
    }
}

pub fn open_backend(args: &Cli) -> Result<(Arc<dyn StudyBackend>, String)> {
    let token = resolve_token(args)?;
    match args.backend {
        BackendKind::Http => Ok((Arc::new(HttpBackend::new(args.base_url.clone())), token)),
        BackendKind::Memory => {
            let backend = MemoryBackend::new();
            if let Some(path) = &args.file {
                let loaded = words::load_words(path)?;
                tracing::debug!(count = loaded.len(), file = %path.display(), "seeded memory backend");
                backend.seed_today(loaded.clone());
                backend.seed_review(ReviewKind::PostLearning, loaded.clone());
                backend.seed_review(ReviewKind::StagedDaily, loaded);
            }
            Ok((Arc::new(backend), token))
        }
    }
}

fn resolve_token(args: &Cli) -> Result<String> {
    if let Some(t) = &args.token {
        return Ok(t.clone());
    }
    if let Ok(t) = std::env::var("VOCALOOP_TOKEN") {
        if !t.trim().is_empty() {
            return Ok(t);
        }
    }
    // the memory backend only checks that a token is present
    if matches!(args.backend, BackendKind::Memory) {
        return Ok("offline".to_string());
    }
    config::load_token()?
        .ok_or_else(|| anyhow!("no auth token; pass --token or run `vocaloop login <token>`"))
}

fn review_kind(kind: &QuizKind) -> ReviewKind {
    match kind {
        QuizKind::PostLearning => ReviewKind::PostLearning,
        QuizKind::StagedDaily => ReviewKind::StagedDaily,
    }
}

async fn words_cmd(backend: Arc<dyn StudyBackend>, token: &str, cmd: WordsCmd) -> Result<()> {
    match cmd {
        WordsCmd::List => {
            let list = backend.fetch_today_words(token).await?;
            if list.is_empty() {
                println!("no words today");
                return Ok(());
            }
            for w in list {
                println!("{}\t{}\t{}\tpriority={}", w.id, w.text, w.meaning, w.priority);
            }
        }
    }
    Ok(())
}

async fn study_cmd(backend: Arc<dyn StudyBackend>, token: &str, cmd: StudyCmd) -> Result<()> {
    let catalog = backend.fetch_today_words(token).await?;

    let selection = if cmd.backfill {
        let mut rng = match cmd.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        select_with_backfill(&catalog, cmd.goal, cmd.threshold, &mut rng)?
    } else {
        select_by_priority(&catalog, cmd.goal)?
    };

    if selection.is_empty() {
        println!("nothing to study today");
        return Ok(());
    }

    println!(
        "study for {}: {} word(s)",
        chrono::Local::now().format("%Y-%m-%d"),
        selection.len()
    );

    let mut session = StudySession::new(selection);
    while let Some(word) = session.current().cloned() {
        let (done, total) = session.progress();
        println!("\n[{}/{}] {}", done + 1, total, word.text);
        prompt_enter("[enter=reveal]")?;
        println!("= {}", word.meaning);
        let line = read_line("[enter=next, r=restart, q=quit] ")?;
        match line.trim().to_lowercase().as_str() {
            "r" | "restart" => session.reset(),
            "q" | "quit" => return Ok(()),
            _ => {
                session.advance();
            }
        }
    }

    let outcome = backend
        .submit_study_completion(token, &session.completed_ids())
        .await?;
    if outcome.success {
        println!("\nstudy pass reported");
    } else {
        println!(
            "\nreport failed: {}",
            outcome.message.unwrap_or_else(|| "unknown error".into())
        );
    }

    if cmd.quiz {
        run_quiz(backend, token, ReviewKind::PostLearning, cmd.seed).await?;
    }
    Ok(())
}

async fn run_quiz(
    backend: Arc<dyn StudyBackend>,
    token: &str,
    kind: ReviewKind,
    seed: Option<u64>,
) -> Result<()> {
    let pool = backend.fetch_review_words(token, kind).await?;
    if pool.is_empty() {
        println!("nothing to review");
        return Ok(());
    }

    let mut quiz = match seed {
        Some(s) => QuizSession::with_seed(pool, s),
        None => QuizSession::new(pool),
    };

    while let Some(q) = quiz.generate_question() {
        println!(
            "\n[{}/{}] {}",
            quiz.completed_count(),
            quiz.total_count(),
            q.word.text
        );
        for (i, opt) in q.options.iter().enumerate() {
            println!("  {}) {}", i + 1, opt);
        }
        let picked = loop {
            let line = read_line("answer> ")?;
            let s = line.trim();
            if s.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match s.parse::<usize>() {
                Ok(n) if (1..=q.options.len()).contains(&n) => break n - 1,
                _ => println!("enter 1-{} or q", q.options.len()),
            }
        };
        let is_correct = picked == q.correct_index;
        if is_correct {
            println!("correct");
        } else {
            println!("wrong, answer: {}", q.options[q.correct_index]);
        }
        quiz.handle_answer(is_correct);
    }

    let results = quiz.generate_results();
    let summary = summarize(&results);
    println!(
        "\nscore: {}/{} ({:.0}%)",
        summary.correct,
        summary.total,
        summary.accuracy() * 100.0
    );

    let outcome = backend
        .submit_review_results(token, kind, Some(Uuid::new_v4()), &results)
        .await?;
    if outcome.success {
        println!("results reported");
    } else {
        println!(
            "report failed: {}",
            outcome.message.unwrap_or_else(|| "unknown error".into())
        );
    }
    Ok(())
}

fn prompt_enter(label: &str) -> Result<()> { print!("{label}"); stdout().flush().ok(); let mut s = String::new(); stdin().read_line(&mut s)?; Ok(()) }
fn read_line(prompt: &str) -> Result<String> { print!("{prompt}"); stdout().flush().ok(); let mut s = String::new(); stdin().read_line(&mut s)?; Ok(s) }
