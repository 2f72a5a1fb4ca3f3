use crate::models::SessionId;

/// Default speaker name of the learner in Cambly transcripts
pub const DEFAULT_LEARNER: &str = "Neal";

/// System prompt for the correction request.
///
/// `{learner}` is replaced with the learner's speaker name.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"あなたは日本人に英語を教える先生です
入力された会話文字起こしを使って、私の英語学習に役立つ分析と改善提案をしてください。出力は以下のステップに分けてください。
私は{learner}の箇所です


# 目的
- 後で復習に使える資料にする
- 自身の英会話から自分だけの英語学習資料を作る

# 厳守事項
- 回答のみ出力してください
- 最後の余計なアドバイスやフォローアップは不要です

【ステップ1: 採点】
私が話した内容を採点すると何点ですか？以下を基準に教えてください
またA1~C2だとどのレベルか教えてください。またそれらの理由を教えて
A1:0~20
A2:21~40
B1:41~60
B2:61~80
C1:81~99
C2:100

【ステップ2: 誤り修正】
私が話した英語の文法的な誤りや不自然な表現を大事と思われる10個をピックアップしてください
それをネイティブが使いそうな表現に直してください
その10個の文法や修正理由を説明してください。

【ステップ3: 会話リプレイ】
返答に困っていたと思われる部分を探し、その場面でネイティブならどう返すか自然な返答例を質問とその回答を日本語訳を付けて提示してください。

【ステップ4: 自己分析】
会話全体を振り返り、私の強みと弱みをまとめ、次回の会話で意識すべき具体的な学習アドバイスを3つ提案してください。

【ステップ5: 新しい単語やフレーズ】
会話全体を振り返り、覚えておくとよい単語や表現があれば理由と今回の会話で使える例文にして提案してください。
"#;

/// Build the system prompt for a learner
pub fn build_system_prompt(learner: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{learner}", learner)
}

/// Wrap the formatted transcript as the user message
pub fn build_user_prompt(transcript: &str) -> String {
    format!("\n---\n{transcript}\n---\n")
}

/// Render the correction document saved to the output directory
pub fn render_correction_document(session: &SessionId, correction: &str) -> String {
    format!(
        "# Cambly English Correction - {}\n\n---\n\n## Corrections and Suggestions\n\n{}\n",
        session.display_date(),
        correction
    )
}
