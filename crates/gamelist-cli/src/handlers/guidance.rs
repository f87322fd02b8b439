use anyhow::Result;

pub fn handle(catalog_len: usize) -> Result<()> {
    println!("gamelist - browse a game catalog ({} games loaded)\n", catalog_len);
    println!("Quick commands:");
    println!("  gamelist list                          # First page, dataset order");
    println!("  gamelist list --search zel             # Title search");
    println!("  gamelist list --genre RPG --sort rating");
    println!("  gamelist list --per-page all           # Everything on one page");
    println!("  gamelist genres                        # Genre filter options");
    println!("  gamelist browse                        # Interactive session\n");
    println!("For more commands:");
    println!("  gamelist --help");
    Ok(())
}
