// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{follow_redirects, resolve, BasePath, Decision, RedirectLoop};
use crate::model::{HideList, TabDescriptor, TabName};

fn tab(name: &str) -> TabDescriptor {
    TabDescriptor::new(TabName::new(name).expect("tab name"), name)
}

fn base() -> BasePath {
    BasePath::new("/staking").expect("base path")
}

#[fixture]
fn items() -> Vec<TabDescriptor> {
    vec![tab("overview").as_root(), tab("query").with_alias("q")]
}

fn hidden(names: &[&str]) -> HideList {
    names.iter().copied().collect()
}

fn alias(target: &str) -> Decision {
    Decision::RedirectToAlias {
        target: target.to_owned(),
    }
}

fn to_base() -> Decision {
    Decision::RedirectToBase {
        target: "/staking".to_owned(),
    }
}

#[rstest]
#[case("/staking/q", &[], alias("/staking/query"))]
#[case("/staking/unknown", &[], to_base())]
#[case("/staking/query", &["query".into()], to_base())]
#[case("/staking/query", &[], Decision::NoAction)]
#[case("/staking/query/5Grw", &[], Decision::NoAction)]
#[case("/staking/overview", &[], to_base())]
#[case("/staking/", &[], to_base())]
#[case("/elsewhere", &[], to_base())]
#[case("", &[], to_base())]
#[case("/staking/query", &[false.into(), None::<&str>.into()], Decision::NoAction)]
fn resolves_locations(
    items: Vec<TabDescriptor>,
    #[case] path: &str,
    #[case] hide: &[crate::model::HideEntry],
    #[case] expected: Decision,
) {
    let hide: HideList = hide.iter().cloned().collect();
    assert_eq!(resolve(path, &base(), &items, &hide), expected);
}

#[rstest]
#[case(&[])]
#[case(&["query"])]
#[case(&["overview", "query"])]
fn base_path_is_always_settled(items: Vec<TabDescriptor>, #[case] names: &[&str]) {
    assert_eq!(resolve("/staking", &base(), &items, &hidden(names)), Decision::NoAction);
    assert_eq!(resolve("/staking", &base(), &[], &hidden(names)), Decision::NoAction);
}

#[rstest]
fn root_alias_redirects_to_base_path_as_alias(mut items: Vec<TabDescriptor>) {
    items[0] = tab("overview").as_root().with_alias("home");
    assert_eq!(
        resolve("/staking/home", &base(), &items, &HideList::new()),
        alias("/staking")
    );
}

#[rstest]
fn first_alias_match_wins(mut items: Vec<TabDescriptor>) {
    items.push(tab("other").with_alias("q"));
    assert_eq!(
        resolve("/staking/q", &base(), &items, &HideList::new()),
        alias("/staking/query")
    );
}

#[rstest]
fn hidden_tab_alias_still_redirects_to_that_tab(items: Vec<TabDescriptor>) {
    let hide = hidden(&["query"]);
    assert_eq!(resolve("/staking/q", &base(), &items, &hide), alias("/staking/query"));

    let chain = follow_redirects("/staking/q", &base(), &items, &hide).expect("chain settles");
    assert_eq!(chain, vec!["/staking/query".to_owned(), "/staking".to_owned()]);
}

#[rstest]
#[case("/staking/q", &[])]
#[case("/staking/unknown", &[])]
#[case("/staking/query", &["query"])]
#[case("/staking/overview/extra", &[])]
#[case("/x", &["overview"])]
fn redirect_targets_resolve_to_no_action(
    items: Vec<TabDescriptor>,
    #[case] path: &str,
    #[case] names: &[&str],
) {
    let hide = hidden(names);
    let decision = resolve(path, &base(), &items, &hide);
    let target = decision.target().expect("redirect");
    assert_eq!(resolve(target, &base(), &items, &hide), Decision::NoAction);
}

#[rstest]
fn settled_location_has_empty_chain(items: Vec<TabDescriptor>) {
    let chain = follow_redirects("/staking/query", &base(), &items, &HideList::new())
        .expect("settled");
    assert!(chain.is_empty());
}

#[test]
fn self_alias_is_settled_in_place() {
    let items = vec![tab("overview").as_root(), tab("query").with_alias("query")];
    let decision = resolve("/staking/query", &base(), &items, &HideList::new());
    assert!(decision.is_settled_at("/staking/query"));
    assert!(follow_redirects("/staking/query", &base(), &items, &HideList::new())
        .expect("settled")
        .is_empty());
}

#[test]
fn crossed_aliases_are_a_redirect_loop() {
    let items = vec![
        tab("overview").as_root(),
        tab("a").with_alias("b"),
        tab("b").with_alias("a"),
    ];

    let err = follow_redirects("/staking/a", &base(), &items, &HideList::new()).unwrap_err();
    assert_eq!(
        err,
        RedirectLoop {
            from: "/staking/a".to_owned(),
            chain: vec!["/staking/b".to_owned(), "/staking/a".to_owned()],
        }
    );
    assert_eq!(
        err.to_string(),
        "redirect loop starting at /staking/a -> /staking/b -> /staking/a"
    );
}
