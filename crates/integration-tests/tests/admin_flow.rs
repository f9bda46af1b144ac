//! Full walk through the view state machine: browse, log in, publish,
//! delete, manage categories, log out.

use integration_tests::{fresh_app, login_as_admin};
use nb_core::models::AppView;
use nb_core::seed::ALL_CATEGORIES;

#[test]
fn anonymous_visitor_can_browse_but_not_manage() {
    let mut app = fresh_app();
    assert_eq!(app.view(), AppView::Home);
    assert_eq!(app.visible_notices().len(), 2);

    // Reading works from any list.
    let id = app.visible_notices()[0].id.clone();
    assert!(app.open_notice(&id));
    assert_eq!(app.view(), AppView::Detail);
    app.back_home();

    // Management surfaces bounce to login.
    app.open_admin();
    assert_eq!(app.view(), AppView::Login);
    app.cancel_login();
    app.open_create();
    assert_eq!(app.view(), AppView::Login);
    assert!(app.add_category("新分类").is_err());
}

#[test]
fn publish_flow_ends_on_admin_with_the_notice_listed() {
    let mut app = fresh_app();
    login_as_admin(&mut app);
    assert_eq!(app.view(), AppView::Admin);

    app.open_create();
    assert_eq!(app.notice_form().category, "健康关爱");
    app.notice_form_mut().title = "  关于装备换发的通知  ".to_string();
    app.notice_form_mut().content = "请各单位于本周五前完成登记。".to_string();
    app.notice_form_mut().category = "生活福利".to_string();

    let published = app.submit_notice().unwrap();
    assert_eq!(app.view(), AppView::Admin);
    // Title is stored trimmed.
    assert_eq!(published.title, "关于装备换发的通知");
    assert_eq!(published.author, "系统管理员");

    // The fresh notice is newest, so it leads the public list too.
    app.back_home();
    assert_eq!(app.visible_notices()[0].id, published.id);
}

#[test]
fn category_management_updates_chips_and_create_form() {
    let mut app = fresh_app();
    login_as_admin(&mut app);

    app.add_category("表彰通报").unwrap();
    assert_eq!(*app.filter_chips().last().unwrap(), "表彰通报");

    // Removing the first label shifts the create-form default.
    assert!(app.remove_category("健康关爱").unwrap());
    app.open_create();
    assert_eq!(app.notice_form().category, "心理疏导");
}

#[test]
fn logout_mid_create_bounces_the_view_to_login() {
    let mut app = fresh_app();
    login_as_admin(&mut app);
    app.open_create();
    app.logout();
    // Raw navigation went home on logout; re-opening create without a
    // session must not succeed either.
    assert_eq!(app.view(), AppView::Home);
    app.open_create();
    assert_eq!(app.view(), AppView::Login);
    assert!(app.submit_notice().is_err());
}

#[test]
fn search_state_is_retained_but_drafts_are_not() {
    let mut app = fresh_app();
    app.set_search_query("心理");
    app.set_active_category("心理疏导");

    login_as_admin(&mut app);
    app.open_create();
    app.notice_form_mut().title = "草稿".to_string();
    app.cancel_create();
    app.open_create();
    assert!(app.notice_form().title.is_empty());

    app.logout();
    assert_eq!(app.search_query(), "心理");
    assert_eq!(app.active_category(), "心理疏导");
    let out = app.visible_notices();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, "心理疏导");
    app.set_active_category(ALL_CATEGORIES);
    app.set_search_query("");
    assert_eq!(app.visible_notices().len(), 2);
}
