use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn token_file() -> PathBuf {
    // org = "vocaloop", app = "Vocaloop"
    if let Some(pd) = ProjectDirs::from("com", "vocaloop", "Vocaloop") {
        pd.config_dir().join("token")
    } else {
        // Fallback: current dir
        PathBuf::from(".vocaloop-token")
    }
}

pub fn save_token(token: &str) -> Result<()> {
    let path = token_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, token.trim())?;
    Ok(())
}

pub fn load_token() -> Result<Option<String>> {
    let path = token_file();
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&path)?;
    let s = s.trim().to_string();
    Ok(if s.is_empty() { None } else { Some(s) })
}
