//! 質問 1 件の処理と結果出力

use std::io::Write;

use common::error::Error;
use common::llm::CompletionProvider;

use crate::usecase::processor::MathQuestionProcessor;

/// 質問を処理して結果を書き出す
///
/// 生成の成否にかかわらず `Ok(())` を返す。失敗の詳細はプロセッサが
/// エラーログに出しており、ここでは案内文だけを出力する。
pub fn run_question<P: CompletionProvider, W: Write>(
    processor: &MathQuestionProcessor<P>,
    question: &str,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "Processing your mathematical question. Please wait...\n")
        .map_err(|e| Error::io(format!("Failed to write output: {}", e)))?;

    match processor.generate(question) {
        Some(text) => {
            writeln!(out, "Generated Pseudo-Algorithm:\n")
                .map_err(|e| Error::io(format!("Failed to write output: {}", e)))?;
            writeln!(out, "{}", text)
                .map_err(|e| Error::io(format!("Failed to write output: {}", e)))?;
        }
        None => {
            writeln!(
                out,
                "Failed to generate pseudo-algorithm. Please check the logs for more details."
            )
            .map_err(|e| Error::io(format!("Failed to write output: {}", e)))?;
        }
    }

    Ok(())
}
