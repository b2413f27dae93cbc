//! Static methodology panels, one per zoo view.

use dioxus::prelude::*;

use crate::types::ZooView;

#[component]
fn MethodologyFrame(title: String, view: Signal<ZooView>, children: Element) -> Element {
    rsx! {
        section { class: "methodology-page",
            div { class: "page-head",
                h1 { "{title}" }
                button {
                    class: "ghost-btn",
                    onclick: move |_| view.set(ZooView::Table),
                    "返回数据表"
                }
            }
            div { class: "methodology-body", {children} }
        }
    }
}

#[component]
pub fn FactorMethodology(view: Signal<ZooView>) -> Element {
    rsx! {
        MethodologyFrame { title: "因子回测方法论", view,
            div { class: "method-block",
                h2 { "回测设定" }
                p { "全部因子在全市场（剔除 ST、上市不满 60 个交易日的股票）按因子值分十组，" }
                p { "做多第一组、做空第十组，月频调仓，结果未计交易成本。" }
            }
            div { class: "method-block",
                h2 { "指标口径" }
                p { "IC 均值为因子值与下期收益的截面 Spearman 相关系数的时序均值；" }
                p { "IR 值为 IC 均值除以 IC 标准差；独特性为剔除常见风格因子后剩余的增量解释力。" }
            }
            div { class: "method-block",
                h2 { "数据来源" }
                p { "行情与财务数据来自内部研究数据库，因子值按公告日对齐，避免前视偏差。" }
            }
        }
    }
}

#[component]
pub fn ModelMethodology(view: Signal<ZooView>) -> Element {
    rsx! {
        MethodologyFrame { title: "模型评估方法论", view,
            div { class: "method-block",
                h2 { "训练与验证" }
                p { "模型以过去八年数据滚动训练，按年度留出样本外窗口评估，" }
                p { "表中全部指标为样本外结果。" }
            }
            div { class: "method-block",
                h2 { "指标口径" }
                p { "Rank IC 为模型打分与下期收益的截面秩相关；训练损失为最终轮的验证集损失；" }
                p { "推理耗时为单个截面全市场打分的平均耗时。" }
            }
            div { class: "method-block",
                h2 { "状态说明" }
                p { "Stable 为线上稳定运行；Training 为再训练中；" }
                p { "Degraded 表示近期样本外表现显著回落，等待复核；Experiment 为未上线的试验版本。" }
            }
        }
    }
}

#[component]
pub fn StrategyMethodology(view: Signal<ZooView>) -> Element {
    rsx! {
        MethodologyFrame { title: "策略统计方法论", view,
            div { class: "method-block",
                h2 { "组合构建" }
                p { "各策略在对应基准成分内优化求解，控制行业与风格偏离，" }
                p { "净值为费后模拟盘结果，月频归档。" }
            }
            div { class: "method-block",
                h2 { "指标口径" }
                p { "年化超额相对各自基准计算；相对胜率为月度超额为正的比例；" }
                p { "最大回撤与超额回撤均在所选回测窗口内统计。" }
            }
            div { class: "method-block",
                h2 { "更新频率" }
                p { "表现数据每月初更新上一自然月，持仓明细随调仓日更新。" }
            }
        }
    }
}
