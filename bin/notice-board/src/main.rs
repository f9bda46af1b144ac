//! # Notice-Board Binary
//!
//! Assembles the application from feature-selected plugins and drives the
//! view controller from a line-oriented terminal loop. The loop is the
//! thin presentation collaborator: it only renders controller state and
//! forwards user actions; all rules live in `nb-app`.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use nb_app::BoardApp;
use nb_core::models::AppView;
use nb_core::seed::ALL_CATEGORIES;

// Feature-gated imports: the binary is compiled to order.
#[cfg(feature = "store-file")]
use nb_store_file::FileStore;

#[cfg(all(feature = "store-memory", not(feature = "store-file")))]
use nb_store_memory::MemoryStore;

#[cfg(feature = "auth-fixed")]
use nb_auth_fixed::FixedAuthProvider;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // 1. Initialize the store implementation
    #[cfg(feature = "store-file")]
    let store = Arc::new(FileStore::new("./data/board".into()));

    #[cfg(all(feature = "store-memory", not(feature = "store-file")))]
    let store = Arc::new(MemoryStore::new());

    // 2. Initialize the auth implementation
    #[cfg(feature = "auth-fixed")]
    let auth = Box::new(FixedAuthProvider::builtin());

    // 3. Assemble the application root
    let mut app = BoardApp::new(store, auth);

    log::info!("📋 Notice board ready ({} 条通知)", app.notices().len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        render(&app);
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input == "quit" {
            break;
        }
        if let Err(e) = dispatch(&mut app, input, &mut lines) {
            // Validation and auth failures are blocking messages, never fatal.
            println!("!! {e}");
        }
    }
    Ok(())
}

/// Routes one command line to a controller action based on the current view.
fn dispatch(
    app: &mut BoardApp,
    input: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> nb_core::Result<()> {
    let (cmd, arg) = match input.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (input, ""),
    };
    match (app.view(), cmd) {
        (AppView::Home, "search") => app.set_search_query(arg),
        (AppView::Home, "cat") => {
            let label = if arg.is_empty() { ALL_CATEGORIES } else { arg };
            app.set_active_category(label);
        }
        (AppView::Home, "open") => {
            if !app.open_notice(arg) {
                println!("通知不存在: {arg}");
            }
        }
        (AppView::Home, "login") => app.open_login(),
        (AppView::Home, "admin") => app.open_admin(),

        (AppView::Detail, "back") => app.back_home(),

        (AppView::Login, "user") => app.login_form_mut().username = arg.to_string(),
        (AppView::Login, "pass") => app.login_form_mut().password = arg.to_string(),
        (AppView::Login, "submit") => {
            let user = app.submit_login()?;
            println!("欢迎, {}", user.username);
        }
        (AppView::Login, "cancel") => app.cancel_login(),

        (AppView::Admin, "new") => app.open_create(),
        (AppView::Admin, "del") => {
            // Irreversible: ask before forwarding the confirmed intent.
            println!("确认删除此通知吗？此操作不可恢复。(y/N)");
            let confirmed = matches!(
                lines.next().and_then(|l| l.ok()).as_deref().map(str::trim),
                Some("y") | Some("Y")
            );
            if app.delete_notice(arg, confirmed)? {
                println!("已删除。");
            }
        }
        (AppView::Admin, "addcat") => app.add_category(arg)?,
        (AppView::Admin, "rmcat") => {
            app.remove_category(arg)?;
        }
        (AppView::Admin, "open") => {
            app.open_notice(arg);
        }
        (AppView::Admin, "logout") => app.logout(),
        (AppView::Admin, "home") => app.back_home(),

        (AppView::Create, "title") => app.notice_form_mut().title = arg.to_string(),
        (AppView::Create, "body") => app.notice_form_mut().content = arg.to_string(),
        (AppView::Create, "category") => app.notice_form_mut().category = arg.to_string(),
        (AppView::Create, "submit") => {
            let notice = app.submit_notice()?;
            println!("通知发布成功：{}", notice.title);
        }
        (AppView::Create, "cancel") => app.cancel_create(),

        _ => println!("未知命令: {input}"),
    }
    Ok(())
}

fn render(app: &BoardApp) {
    match app.view() {
        AppView::Home => {
            println!("\n—— 通知公告 ——");
            println!("分类: {}  [当前: {}]", app.filter_chips().join(" / "), app.active_category());
            if !app.search_query().is_empty() {
                println!("搜索: {}", app.search_query());
            }
            let visible = app.visible_notices();
            if visible.is_empty() {
                println!("(暂无匹配的通知)");
            }
            for n in &visible {
                println!("[{}] {} · {} · {}", n.id, n.title, n.category, n.author);
            }
            println!("命令: search <词> | cat <分类> | open <id> | login | quit");
        }
        AppView::Detail => {
            // view() guarantees a selection here.
            if let Some(n) = app.selected_notice() {
                println!("\n—— {} ——", n.title);
                println!("{} · {}", n.category, n.author);
                println!("{}", n.content);
            }
            println!("命令: back");
        }
        AppView::Login => {
            println!("\n—— 管理员登录 ——");
            println!("命令: user <账号> | pass <密码> | submit | cancel");
        }
        AppView::Admin => {
            let user = app.current_user().map(|u| u.username.as_str()).unwrap_or("");
            println!("\n—— 内容管理 ({user}) ——");
            for n in app.notices() {
                println!("[{}] {} · {}", n.id, n.title, n.category);
            }
            println!("分类: {}", app.categories().join(" / "));
            println!("命令: new | del <id> | addcat <名> | rmcat <名> | open <id> | logout | home");
        }
        AppView::Create => {
            let form = app.notice_form();
            println!("\n—— 发布通知 ——");
            println!("标题: {}", form.title);
            println!("分类: {} (可选: {})", form.category, app.categories().join(" / "));
            println!("正文: {}", form.content);
            println!("命令: title <标题> | body <正文> | category <分类> | submit | cancel");
        }
    }
}
