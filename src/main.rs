mod app;
mod cli;
mod error;
mod event;
mod storage;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use store::TaskStore;
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(cli: &Cli) -> io::Result<()> {
    // 主题：命令行参数优先，其次是配置文件
    let config = storage::config::load_config();
    let theme = match cli.theme {
        Some(ref name) => Theme::from_name(name),
        None => Theme::from_name(&config.theme.name),
    };

    // 任务数据是纯内存状态，每次启动从空列表（或示例数据）开始
    let store = if cli.demo {
        TaskStore::sample()
    } else {
        TaskStore::new()
    };

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new(theme, store);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        // SAFETY: called at the very start of main, before any other threads
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "1");
        }
    }

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    run_tui(&cli)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::list::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
