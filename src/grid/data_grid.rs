//! Data Grid Component
//!
//! Renders one fetched row set. The three non-table states are mutually
//! exclusive and checked in priority order: loading, then error, then empty.

use leptos::prelude::*;
use leptos_colreorder::{
    bind_global_mouseup, create_colreorder_signals, make_on_header_mousedown,
    make_on_header_mouseenter, make_on_header_mouseleave,
};

use crate::components::{ErrorMessage, LoadingMessage, NoDataMessage};
use crate::grid::cell::{cell_class, cell_text, ColumnSpec};
use crate::grid::columns::{default_order, move_column, sanitize_order};
use crate::grid::export::{download_csv, to_csv};
use crate::grid::state::{apply, toggle_sort, GridQuery, SortDir, PAGE_SIZES};
use crate::models::Row;
use crate::settings::GridSettings;

#[component]
pub fn DataGrid(
    /// Namespace of the persisted column order
    table_id: &'static str,
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    /// Fixed column list; when omitted, columns derive from the row keys
    #[prop(optional, into)] columns: Option<Vec<ColumnSpec>>,
    #[prop(optional)] paginate: bool,
    #[prop(optional)] filterable: bool,
    #[prop(optional)] exportable: bool,
) -> impl IntoView {
    let settings = expect_context::<GridSettings>();
    let fixed_columns = StoredValue::new(columns);

    let (order, set_order) = signal(Vec::<String>::new());
    let (query, set_query) = signal(GridQuery {
        page_size: if paginate { PAGE_SIZES[1] } else { usize::MAX },
        ..Default::default()
    });

    // Restore persisted order whenever the column set changes
    Effect::new(move |_| {
        let rows_now = rows.get();
        let keys: Vec<String> = fixed_columns.with_value(|c| match c {
            Some(specs) => specs.iter().map(|s| s.key.clone()).collect(),
            None => rows_now
                .first()
                .map(|r| r.keys().cloned().collect())
                .unwrap_or_default(),
        });
        if keys.is_empty() {
            set_order.set(Vec::new());
            return;
        }
        let next = match settings.load_column_order(table_id) {
            Some(saved) => sanitize_order(&saved, &keys),
            None => default_order(&keys),
        };
        set_order.set(next);
    });

    // Column specs in display order
    let specs = Memo::new(move |_| {
        let order_now = order.get();
        fixed_columns.with_value(|c| {
            order_now
                .iter()
                .map(|key| match c {
                    Some(list) => list
                        .iter()
                        .find(|s| &s.key == key)
                        .cloned()
                        .unwrap_or_else(|| ColumnSpec::for_key(key)),
                    None => ColumnSpec::for_key(key),
                })
                .collect::<Vec<_>>()
        })
    });

    let page_view = Memo::new(move |_| apply(&rows.get(), &query.get(), &order.get()));

    // Column drag-reorder, persisted through the settings store
    let cr = create_colreorder_signals();
    bind_global_mouseup(cr, move |dragged_idx, target_idx| {
        // Drops can race grid unmount; a disposed order signal means discard
        let Some(order_now) = order.try_get_untracked() else {
            return;
        };
        if let (Some(dragged), Some(target)) = (order_now.get(dragged_idx), order_now.get(target_idx)) {
            let next = move_column(&order_now, dragged, target);
            settings.save_column_order(table_id, &next);
            set_order.set(next);
        }
    });

    let on_sort = move |key: String| {
        // A drop that ends on a header must not also toggle its sort
        if cr.drag_just_ended_read.get_untracked() {
            return;
        }
        set_query.update(|q| {
            q.sort = toggle_sort(q.sort.as_ref(), &key);
            q.page = 0;
        });
    };

    let on_export = move |_| {
        let mut q = query.get_untracked();
        q.page = 0;
        q.page_size = usize::MAX;
        let full = apply(&rows.get_untracked(), &q, &order.get_untracked());
        let csv = to_csv(&full.rows, &specs.get_untracked());
        download_csv(&format!("{}.csv", table_id), &csv);
    };

    let header_row = move || {
        specs
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, spec)| {
                let sort_key = spec.key.clone();
                let marker_key = spec.key.clone();
                let on_mousedown = make_on_header_mousedown(cr, idx);
                let on_mouseenter = make_on_header_mouseenter(cr, idx);
                let on_mouseleave = make_on_header_mouseleave(cr);
                let th_class = move || {
                    if cr.dragging_col_read.get() == Some(idx) {
                        "grid-th dragging"
                    } else if cr.hover_col_read.get() == Some(idx) {
                        "grid-th drop-target"
                    } else {
                        "grid-th"
                    }
                };
                let sort_marker = move || match query.get().sort {
                    Some(ref s) if s.column == marker_key => match s.dir {
                        SortDir::Asc => " ▲",
                        SortDir::Desc => " ▼",
                    },
                    _ => "",
                };
                view! {
                    <th
                        class=th_class
                        on:mousedown=on_mousedown
                        on:mouseenter=on_mouseenter
                        on:mouseleave=on_mouseleave
                        on:click=move |_| on_sort(sort_key.clone())
                    >
                        {spec.header.clone()}
                        <span class="sort-marker">{sort_marker}</span>
                    </th>
                }
            })
            .collect_view()
    };

    let filter_row = move || {
        if !filterable {
            return ().into_any();
        }
        let inputs = specs
            .get()
            .into_iter()
            .map(|spec| {
                let key = spec.key.clone();
                let value_key = spec.key.clone();
                let current = move || {
                    query
                        .get()
                        .column_filters
                        .iter()
                        .find(|(c, _)| c == &value_key)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                };
                view! {
                    <th class="grid-filter-cell">
                        <input
                            type="text"
                            placeholder="Filtrar..."
                            prop:value=current
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                let key = key.clone();
                                set_query.update(|q| {
                                    q.page = 0;
                                    q.column_filters.retain(|(c, _)| c != &key);
                                    if !val.trim().is_empty() {
                                        q.column_filters.push((key, val));
                                    }
                                });
                            }
                        />
                    </th>
                }
            })
            .collect_view();
        view! { <tr class="grid-filter-row">{inputs}</tr> }.into_any()
    };

    let body_rows = move || {
        page_view
            .get()
            .rows
            .into_iter()
            .map(|row| {
                let cells = specs
                    .get()
                    .iter()
                    .map(|spec| {
                        let text = cell_text(&row, spec);
                        let class = cell_class(&row, spec);
                        view! {
                            <td class="grid-td">
                                <span class=class>{text}</span>
                            </td>
                        }
                    })
                    .collect_view();
                view! { <tr class="grid-row">{cells}</tr> }
            })
            .collect_view()
    };

    let toolbar = move || {
        if !filterable && !exportable {
            return ().into_any();
        }
        view! {
            <div class="grid-toolbar">
                {filterable.then(|| view! {
                    <input
                        type="text"
                        class="grid-global-filter"
                        placeholder="Buscar en todas las columnas..."
                        prop:value=move || query.get().global_filter
                        on:input=move |ev| {
                            let val = event_target_value(&ev);
                            set_query.update(|q| {
                                q.global_filter = val;
                                q.page = 0;
                            });
                        }
                    />
                })}
                {exportable.then(|| view! {
                    <button class="grid-export-btn" on:click=on_export>"Exportar"</button>
                })}
            </div>
        }
        .into_any()
    };

    let footer = move || {
        if !paginate {
            return ().into_any();
        }
        let page = move || page_view.get().page;
        let page_count = move || page_view.get().page_count;
        let at_first = move || page() == 0;
        let at_last = move || page() + 1 >= page_count();
        let go_to = move |target: usize| set_query.update(|q| q.page = target);
        view! {
            <div class="grid-footer">
                <span class="grid-row-count">
                    {move || format!("{} resultados", page_view.get().total_rows)}
                </span>
                <button disabled=at_first on:click=move |_| go_to(0)>"«"</button>
                <button disabled=at_first on:click=move |_| {
                    let p = page();
                    go_to(p.saturating_sub(1));
                }>"‹"</button>
                <span class="grid-page-label">
                    {move || format!("Página {} de {}", page() + 1, page_count())}
                </span>
                <button disabled=at_last on:click=move |_| {
                    let (p, n) = (page(), page_count());
                    go_to((p + 1).min(n - 1));
                }>"›"</button>
                <button disabled=at_last on:click=move |_| go_to(page_count() - 1)>"»"</button>
                <select
                    class="grid-page-size"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            set_query.update(|q| q.page_size = size);
                        }
                    }
                >
                    {PAGE_SIZES
                        .into_iter()
                        .map(|size| {
                            let selected = move || query.get().page_size == size;
                            view! {
                                <option value=size.to_string() selected=selected>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="data-grid">
            {move || {
                if loading.get() {
                    view! { <LoadingMessage /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorMessage message=message /> }.into_any()
                } else if rows.get().is_empty() {
                    view! { <NoDataMessage /> }.into_any()
                } else {
                    view! {
                        <div class="grid-table-wrap">
                            {toolbar}
                            <table class="grid-table">
                                <thead>
                                    <tr class="grid-header-row">{header_row}</tr>
                                    {filter_row}
                                </thead>
                                <tbody>{body_rows}</tbody>
                            </table>
                            {footer}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
