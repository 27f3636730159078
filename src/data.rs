//! 料理カタログデータ
//!
//! ビルド時に固定される静的なカタログ。実行時に変更されることはない。

use crate::models::Dish;

/// 全料理のリスト（一覧画面の表示順）
pub fn all_dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: 1,
            title: "寿司".to_string(),
            detail: "酢飯に魚介などのネタを合わせた日本を代表する料理。\
                     江戸前の握り寿司のほか、巻き寿司やちらし寿司など多くの種類がある。"
                .to_string(),
        },
        Dish {
            id: 2,
            title: "天ぷら".to_string(),
            detail: "魚介や野菜に小麦粉の衣をつけて揚げた料理。\
                     軽い衣の食感が特徴で、天つゆや塩で味わう。"
                .to_string(),
        },
        Dish {
            id: 3,
            title: "すき焼き".to_string(),
            detail: "薄切りの牛肉を甘辛い割り下で煮ながら食べる鍋料理。\
                     ねぎや豆腐、しらたきなどの具材とともに、溶き卵につけて食べる。"
                .to_string(),
        },
        Dish {
            id: 4,
            title: "そば".to_string(),
            detail: "そば粉から作る日本の伝統的な麺料理。\
                     冷たいざるそばと温かいかけそばがあり、地域ごとに独自の食べ方が残る。"
                .to_string(),
        },
        Dish {
            id: 5,
            title: "ラーメン".to_string(),
            detail: "中国から伝わり日本で独自に発展した麺料理。\
                     醤油、味噌、塩、豚骨など多彩なスープがあり、ご当地ラーメンも数多い。"
                .to_string(),
        },
    ]
}

/// IDで料理を検索する
pub fn find_dish(id: u32) -> Option<Dish> {
    all_dishes().into_iter().find(|dish| dish.id == id)
}

/// 文字列IDから料理を検索する
///
/// IDはURLから文字列で渡ってくるため、数値へ変換してから比較する。
/// 数値として解釈できない場合は未検出として扱う。
pub fn resolve_dish(id_param: &str) -> Option<Dish> {
    id_param.parse::<u32>().ok().and_then(find_dish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let dishes = all_dishes();
        let ids: HashSet<u32> = dishes.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), dishes.len());
    }

    #[test]
    fn test_find_dish() {
        let dish = find_dish(2).expect("ID=2の料理があるはず");
        assert_eq!(dish.id, 2);
        assert!(find_dish(999).is_none());
    }

    #[test]
    fn test_resolve_dish_parses_text_id() {
        let dish = resolve_dish("2").expect("文字列のIDでも検索できるはず");
        assert_eq!(dish.id, 2);
    }

    #[test]
    fn test_resolve_dish_misses() {
        assert!(resolve_dish("999").is_none());
        assert!(resolve_dish("abc").is_none());
        assert!(resolve_dish("").is_none());
        // 数値の前後に余計な文字があるものも未検出扱い
        assert!(resolve_dish("2個目").is_none());
    }
}
